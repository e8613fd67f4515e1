pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
