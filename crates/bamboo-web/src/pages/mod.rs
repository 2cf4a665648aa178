mod not_found;
mod style_guide_code;

pub use not_found::NotFoundPage;
pub use style_guide_code::StyleGuideCodePage;
