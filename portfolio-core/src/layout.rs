//! Page geometry: section anchors, scroll progress and the skills orbit

/// Scroll offset after which the navbar gains its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Radius of the skill-category orbit.
pub const ORBIT_RADIUS_PX: f64 = 120.0;

/// Page section reachable from the navbar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Skills,
    Contact,
}

pub const SECTIONS: [Section; 6] = [
    Section::Home,
    Section::About,
    Section::Projects,
    Section::Experience,
    Section::Skills,
    Section::Contact,
];

impl Section {
    /// Element id of the section.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Percent of the document scrolled, in `[0, 100]`.
///
/// Documents shorter than the viewport report zero.
#[must_use]
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable > 0.0 {
        (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[must_use]
pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > SCROLLED_THRESHOLD_PX
}

/// Offset of bubble `index` out of `count` on a circle of `radius`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn orbit_offset(index: usize, count: usize, radius: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let angle = (index as f64 * 360.0 / count as f64).to_radians();
    (angle.cos() * radius, angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert!((scroll_progress(500.0, 2000.0, 1000.0) - 50.0).abs() < 1e-9);
        assert!((scroll_progress(5000.0, 2000.0, 1000.0) - 100.0).abs() < 1e-9);
        assert!(scroll_progress(-20.0, 2000.0, 1000.0).abs() < 1e-9);
    }

    #[test]
    fn short_documents_report_zero() {
        assert!(scroll_progress(10.0, 800.0, 1000.0).abs() < 1e-9);
        assert!(scroll_progress(0.0, 1000.0, 1000.0).abs() < 1e-9);
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn orbit_places_first_bubble_on_the_right() {
        let (x, y) = orbit_offset(0, 4, ORBIT_RADIUS_PX);
        assert!((x - 120.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
        let (x, y) = orbit_offset(1, 4, ORBIT_RADIUS_PX);
        assert!(x.abs() < 1e-9);
        assert!((y - 120.0).abs() < 1e-9);
        assert_eq!(orbit_offset(3, 0, ORBIT_RADIUS_PX), (0.0, 0.0));
    }

    #[test]
    fn anchors_and_hrefs_line_up() {
        for section in SECTIONS {
            assert_eq!(section.href(), format!("#{}", section.anchor()));
        }
        assert_eq!(Section::Contact.label(), "Contact");
    }
}
