use crate::persona::{Persona, PersonaContext};

/// A named scroll target on the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const HOME_ANCHOR: &str = "hero";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "About",
        anchor: "about",
    },
    NavItem {
        label: "Achievements",
        anchor: "achievements",
    },
    NavItem {
        label: "Portfolio",
        anchor: "portfolio",
    },
    NavItem {
        label: "Contact",
        anchor: "contact",
    },
];

/// Whatever can bring an element into view by id.
pub trait Viewport {
    /// Returns false when no element carries `id`.
    fn scroll_into_view(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationController {
    menu_open: bool,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scrolls to `anchor` if it exists. The compact menu closes either way.
    pub fn scroll_to(&mut self, anchor: &str, viewport: &impl Viewport) -> bool {
        let found = viewport.scroll_into_view(anchor);
        self.close_menu();
        found
    }

    pub fn toggle_theme(&mut self, context: &mut PersonaContext) -> Persona {
        self.close_menu();
        context.toggle()
    }
}

/// Which top-level view the page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageView {
    #[default]
    Selecting,
    Viewing,
}

impl PageView {
    /// Picks a persona from the landing view and opens the portfolio.
    pub fn choose(&mut self, persona: Persona, context: &mut PersonaContext) {
        context.set_active(persona);
        *self = PageView::Viewing;
    }

    pub fn back(&mut self) {
        *self = PageView::Selecting;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        content::Section,
        persona::{MemoryStore, PreferenceStore},
    };

    #[derive(Default)]
    struct FakeViewport {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl Viewport for FakeViewport {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_scroll_to_existing_anchor() {
        let viewport = FakeViewport {
            ids: vec!["about", "contact"],
            ..Default::default()
        };
        let mut nav = NavigationController::new();
        nav.toggle_menu();
        assert!(nav.scroll_to("contact", &viewport));
        assert!(!nav.is_menu_open());
        assert_eq!(*viewport.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn test_scroll_to_missing_anchor_is_noop() {
        let viewport = FakeViewport::default();
        let mut nav = NavigationController::new();
        nav.toggle_menu();
        assert!(!nav.scroll_to("nowhere", &viewport));
        assert!(!nav.is_menu_open());
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_toggle_theme_flips_and_persists() {
        let store = MemoryStore::new();
        let mut context = PersonaContext::new(store.clone());
        let mut nav = NavigationController::new();
        nav.toggle_menu();

        assert_eq!(nav.toggle_theme(&mut context), Persona::Disruptor);
        assert_eq!(store.load(), Some(Persona::Disruptor));
        assert!(!nav.is_menu_open());
        assert_eq!(nav.toggle_theme(&mut context), Persona::Professional);
    }

    #[test]
    fn test_page_view_flow() {
        let mut context = PersonaContext::new(MemoryStore::new());
        let mut view = PageView::default();
        assert_eq!(view, PageView::Selecting);

        view.choose(Persona::Disruptor, &mut context);
        assert_eq!(view, PageView::Viewing);
        assert_eq!(context.active(), Persona::Disruptor);

        view.back();
        assert_eq!(view, PageView::Selecting);
        assert_eq!(context.active(), Persona::Disruptor);
    }

    #[test]
    fn test_nav_anchors_match_sections() {
        let is_section = |anchor: &str| Section::ALL.iter().any(|s| s.anchor() == anchor);
        assert!(is_section(HOME_ANCHOR));
        for item in NAV_ITEMS {
            assert!(is_section(item.anchor), "{}", item.anchor);
        }
    }
}
