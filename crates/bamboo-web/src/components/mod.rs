mod button;
mod card;
mod copy_button;
mod footer;
mod icons;
mod navbar;
mod section;
mod tabs;

pub use button::{ButtonSize, ButtonStyle, ButtonVariant, LinkButton};
pub use card::{Card, CardContent};
pub use copy_button::{CodeBlock, CopyButton, CopyFeedback};
pub use footer::Footer;
pub use icons::{Icon, IconKind};
pub use navbar::Navbar;
pub use section::Section;
pub use tabs::{TabKey, TabList, TabPane};
