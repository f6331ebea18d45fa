/// What the document-level click listener learned about the event target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub inside_toggle: bool,
    pub inside_menu: bool,
    /// `href` of the closest enclosing `a[href^="#"]`, if any.
    pub anchor_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickCommand {
    ToggleMenu,
    /// Same-document navigation. `href` keeps the leading `#`.
    Navigate {
        href: String,
        id: String,
        inside_menu: bool,
    },
    Outside { inside_menu: bool },
}

/// Returns the element id for a same-document link, percent-decoded.
/// A bare `#` or anything not starting with `#` is not a fragment link.
pub fn local_fragment(href: &str) -> Option<String> {
    let raw = href.strip_prefix('#')?;
    if raw.is_empty() {
        return None;
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw.to_string()),
    }
}

pub fn classify(target: &ClickTarget) -> ClickCommand {
    if target.inside_toggle {
        return ClickCommand::ToggleMenu;
    }
    if let Some(href) = &target.anchor_href {
        if let Some(id) = local_fragment(href) {
            return ClickCommand::Navigate {
                href: href.clone(),
                id,
                inside_menu: target.inside_menu,
            };
        }
    }
    ClickCommand::Outside {
        inside_menu: target.inside_menu,
    }
}

/// Document offset to scroll to so the target sits just below the header.
pub fn scroll_target(target_client_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_client_top + scroll_y - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments() {
        assert_eq!(local_fragment("#pricing").as_deref(), Some("pricing"));
        assert_eq!(local_fragment("#"), None);
        assert_eq!(local_fragment(""), None);
        assert_eq!(local_fragment("/about#team"), None);
        assert_eq!(local_fragment("#d%E1%BB%8Bch-v%E1%BB%A5").as_deref(), Some("dịch-vụ"));
    }

    #[test]
    fn toggle_wins_over_everything() {
        let target = ClickTarget {
            inside_toggle: true,
            inside_menu: false,
            anchor_href: Some("#faq".into()),
        };
        assert_eq!(classify(&target), ClickCommand::ToggleMenu);
    }

    #[test]
    fn anchors_become_navigation() {
        let target = ClickTarget {
            inside_toggle: false,
            inside_menu: true,
            anchor_href: Some("#faq".into()),
        };
        assert_eq!(
            classify(&target),
            ClickCommand::Navigate {
                href: "#faq".into(),
                id: "faq".into(),
                inside_menu: true,
            }
        );
    }

    #[test]
    fn bare_hash_is_an_ordinary_click() {
        let target = ClickTarget {
            anchor_href: Some("#".into()),
            ..Default::default()
        };
        assert_eq!(classify(&target), ClickCommand::Outside { inside_menu: false });
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(300.0, 1200.0, 80.0), 1420.0);
        assert_eq!(scroll_target(-200.0, 1200.0, 64.0), 936.0);
    }
}
