pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod icons;
pub mod input;
pub mod skeleton;
pub mod slider;
pub mod switch;
pub mod toggle;
pub mod tooltip;

pub use avatar::{Avatar, AvatarFallback, AvatarImage};
pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use skeleton::Skeleton;
pub use slider::Slider;
pub use switch::Switch;
pub use toggle::Toggle;
pub use tooltip::Tooltip;
