use dioxus::prelude::*;

/// Size presets for [`Avatar`].
#[derive(Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    #[default]
    Small,
    Large,
}

/// Initial-letter avatar. There are no profile pictures; the fallback is the
/// first character of the display name, uppercased.
#[component]
pub fn Avatar(name: String, #[props(default)] size: AvatarSize) -> Element {
    let class = match size {
        AvatarSize::Small => "avatar",
        AvatarSize::Large => "avatar avatar-lg",
    };
    let letter = initial(&name);
    rsx! {
        div {
            class: "{class}",
            "{letter}"
        }
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_first_character_uppercased() {
        assert_eq!(initial("alice"), "A");
        assert_eq!(initial("Bob"), "B");
        assert_eq!(initial("émile"), "É");
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(initial(""), "?");
    }
}
