use leptos::prelude::*;

const BASE_CLASSES: &str = "rounded font-medium transition-all duration-300";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-bamboo-teal text-white hover:bg-opacity-90",
            ButtonVariant::Secondary => "bg-bamboo text-white hover:bg-opacity-90",
            ButtonVariant::Outline => {
                "border border-bamboo-teal text-bamboo-teal bg-transparent hover:bg-bamboo-teal hover:bg-opacity-10"
            }
            ButtonVariant::Ghost => "bg-transparent text-bamboo-charcoal hover:bg-bamboo-beige",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "text-sm px-3 py-1",
            ButtonSize::Md => "px-4 py-2",
            ButtonSize::Lg => "text-lg px-6 py-3",
        }
    }
}

/// Everything that decides a button's classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
    pub disabled: bool,
}

impl ButtonStyle {
    /// Resolve to a class list: base, variant, size, width, then cursor state.
    pub fn class(&self) -> String {
        let mut parts = vec![BASE_CLASSES, self.variant.classes(), self.size.classes()];
        if self.full_width {
            parts.push("w-full");
        }
        parts.push(if self.disabled { "opacity-50 cursor-not-allowed" } else { "cursor-pointer" });
        parts.join(" ")
    }
}

/// An `<a>` styled as a button, for calls to action that navigate
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle { variant, size, ..ButtonStyle::default() };

    view! {
        <a href=href class=style.class()>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_primary_medium() {
        assert_eq!(
            ButtonStyle::default().class(),
            "rounded font-medium transition-all duration-300 bg-bamboo-teal text-white hover:bg-opacity-90 px-4 py-2 cursor-pointer"
        );
    }

    #[test]
    fn disabled_full_width_ghost() {
        let style = ButtonStyle {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Lg,
            full_width: true,
            disabled: true,
        };
        let class = style.class();
        assert!(class.contains("bg-transparent text-bamboo-charcoal"));
        assert!(class.contains("text-lg px-6 py-3"));
        assert!(class.ends_with("w-full opacity-50 cursor-not-allowed"));
        assert!(!class.contains("cursor-pointer"));
    }

    #[test]
    fn every_variant_and_size_resolves_to_its_own_entry() {
        let variants = [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Outline, ButtonVariant::Ghost];
        let sizes = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];
        for variant in variants {
            for size in sizes {
                let class = ButtonStyle { variant, size, ..Default::default() }.class();
                assert!(class.starts_with(BASE_CLASSES));
                assert!(class.contains(variant.classes()));
                assert!(class.contains(size.classes()));
            }
        }
    }
}
