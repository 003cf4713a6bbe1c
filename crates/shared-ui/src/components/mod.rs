// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod field;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod skeleton;
pub mod stat_card;

// Primitive wrappers
pub mod separator;
pub mod tabs;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use field::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use separator::*;
pub use skeleton::*;
pub use stat_card::*;
pub use tabs::*;
