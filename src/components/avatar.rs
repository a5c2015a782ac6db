use crate::utils::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            AvatarSize::Sm => "avatar-sm",
            AvatarSize::Md => "avatar-md",
            AvatarSize::Lg => "avatar-lg",
        }
    }
}

/// Image when `src` is set, otherwise a gradient disc with `fallback`
/// (default "U").
pub fn avatar(src: Option<&str>, alt: &str, fallback: Option<&str>, size: AvatarSize) -> String {
    match src.filter(|s| !s.is_empty()) {
        Some(src) => format!(
            r#"<img class="avatar {}" src="{}" alt="{}">"#,
            size.class(),
            escape_html(src),
            escape_html(alt)
        ),
        None => format!(
            r#"<div class="avatar avatar-fallback {}">{}</div>"#,
            size.class(),
            escape_html(fallback.filter(|f| !f.is_empty()).unwrap_or("U"))
        ),
    }
}

/// First grapheme of a display name, upper-cased.
pub fn initial(name: &str) -> String {
    use unicode_segmentation::UnicodeSegmentation;
    name.graphemes(true)
        .next()
        .map(|g| g.to_uppercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_initial() {
        assert!(avatar(None, "", None, AvatarSize::Sm).contains(">U<"));
        assert!(avatar(Some(""), "", Some("子"), AvatarSize::Md).contains(">子<"));
        assert!(avatar(Some("a.png"), "me", None, AvatarSize::Lg).starts_with("<img"));
        assert_eq!(initial("weimeng"), "W");
        assert_eq!(initial("子君"), "子");
        assert_eq!(initial(""), "");
    }
}
