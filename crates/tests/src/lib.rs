#[cfg(test)]
mod common;

#[cfg(test)]
mod onboarding_tests;

#[cfg(test)]
mod password_reset_tests;

#[cfg(test)]
mod verification_tests;

#[cfg(test)]
mod activity_feed_tests;

#[cfg(test)]
mod config_tests;
