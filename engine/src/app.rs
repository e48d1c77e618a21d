//! Application state: one navigator, six project pages, a masthead and a
//! contact form, all advanced by the frame clock.

use std::time::{Duration, Instant};

use crate::carousel::Carousel;
use crate::config::{Motion, Thresholds, VitrineConfig};
use crate::contact::ContactForm;
use crate::content::{self, PROJECT_COUNT, Project};
use crate::counter::StatCounter;
use crate::navigator::Navigator;
use crate::reveal::SectionReveal;
use crate::scroll::{PageScroll, RowSpan};
use crate::typewriter::Typewriter;

/// UI options derived from config.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Which surface owns keyboard input.
///
/// Project-switching arrows only fire in `Browse`; the menu overlay and the
/// contact form scope input to themselves while they are up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Menu,
    Contact,
}

/// Measured extents of the rendered page, in content rows. The renderer
/// reports these back every frame; reveal triggers are evaluated against
/// the most recent measurement.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLayout {
    pub content_rows: u16,
    pub headline: RowSpan,
    pub info: RowSpan,
    pub story: RowSpan,
}

/// Animated state for one project page.
#[derive(Debug)]
pub struct ProjectPage {
    project: &'static Project,
    carousel: Option<Carousel>,
    headline: Typewriter,
    info: SectionReveal,
    story: SectionReveal,
    /// Parallel to `project.details`; `None` for rows without a stat.
    counters: Vec<Option<StatCounter>>,
}

impl ProjectPage {
    fn new(project: &'static Project, motion: &Motion) -> Self {
        let counters = project
            .details
            .iter()
            .map(|detail| {
                detail
                    .stat
                    .map(|stat| StatCounter::new(stat.value, motion.counter_duration))
            })
            .collect();

        Self {
            project,
            carousel: Carousel::new(project.slides.len(), motion.carousel_interval),
            headline: Typewriter::new(
                project.headline,
                motion.headline_char,
                motion.headline_jitter,
                motion.headline_lead,
                motion.cursor_linger,
            ),
            info: SectionReveal::new(
                project.details.len(),
                motion.detail_stagger,
                motion.reveal_fade,
            ),
            story: SectionReveal::new(
                project.story.len(),
                motion.paragraph_stagger,
                motion.reveal_fade,
            ),
            counters,
        }
    }

    #[must_use]
    pub fn project(&self) -> &'static Project {
        self.project
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub fn headline(&self) -> &Typewriter {
        &self.headline
    }

    #[must_use]
    pub fn info(&self) -> &SectionReveal {
        &self.info
    }

    #[must_use]
    pub fn story(&self) -> &SectionReveal {
        &self.story
    }

    #[must_use]
    pub fn counter(&self, detail_index: usize) -> Option<&StatCounter> {
        self.counters.get(detail_index).and_then(Option::as_ref)
    }

    /// Hidden/offset pose for every animated element; the next visibility
    /// pass replays the reveals. The carousel keeps its slide.
    fn rearm(&mut self) {
        self.headline.rearm();
        self.info.rearm();
        self.story.rearm();
        for counter in self.counters.iter_mut().flatten() {
            counter.rearm();
        }
    }

    fn tick(&mut self, delta: Duration) {
        self.headline.tick(delta);
        self.info.tick(delta);
        self.story.tick(delta);
        for counter in self.counters.iter_mut().flatten() {
            counter.tick(delta);
        }
    }
}

pub struct App {
    options: UiOptions,
    thresholds: Thresholds,
    navigator: Navigator,
    pages: Vec<ProjectPage>,
    masthead: Typewriter,
    scroll: PageScroll,
    layout: Option<PageLayout>,
    mode: InputMode,
    contact: ContactForm,
    status_message: Option<String>,
    should_quit: bool,
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&VitrineConfig>) -> Self {
        let options = config
            .and_then(|cfg| cfg.app.as_ref())
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default();
        let motion = Motion::from_config(config.and_then(|cfg| cfg.motion.as_ref()));
        let thresholds = Thresholds::from_config(config.and_then(|cfg| cfg.reveal.as_ref()));

        let pages = content::projects()
            .iter()
            .map(|project| ProjectPage::new(project, &motion))
            .collect();

        let mut masthead = Typewriter::new(
            content::MASTHEAD_TITLE,
            motion.masthead_char,
            Duration::ZERO,
            motion.masthead_lead,
            motion.cursor_linger,
        );
        // The masthead types on startup, not on visibility.
        masthead.trigger();
        if options.reduced_motion {
            masthead.complete();
        }

        Self {
            options,
            thresholds,
            navigator: Navigator::new(PROJECT_COUNT, motion.transition_delay, motion.enter_duration),
            pages,
            masthead,
            scroll: PageScroll::default(),
            layout: None,
            mode: InputMode::default(),
            contact: ContactForm::new(motion.submit_send, motion.submit_reset),
            status_message: None,
            should_quit: false,
            last_frame: Instant::now(),
        }
    }

    // --- frame clock ---

    /// Advance all animation clocks by real elapsed time. Called once per
    /// frame by the event loop.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta);
    }

    /// Deterministic core of [`tick`]: advance by an explicit delta.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(index) = self.navigator.tick(delta) {
            self.on_project_activated(index);
        }

        self.masthead.tick(delta);

        // Carousels advance only while their page is settled on screen.
        if !self.navigator.is_transitioning() {
            let active = self.navigator.active_project();
            if let Some(carousel) = &mut self.pages[active].carousel {
                carousel.tick(delta);
            }
        }

        // Reveal clocks are fire-and-forget: they keep running even if the
        // section scrolls away or a transition starts.
        for page in &mut self.pages {
            page.tick(delta);
        }

        self.evaluate_visibility();
        self.contact.tick(delta);
    }

    /// Fire reveals for whatever the latest layout says is on screen.
    fn evaluate_visibility(&mut self) {
        let Some(layout) = self.layout else {
            return;
        };
        // Nothing arms while the page is mid-transition.
        if self.navigator.is_transitioning() {
            return;
        }

        let reduced = self.options.reduced_motion;
        let active = self.navigator.active_project();
        let scroll = self.scroll;
        let thresholds = self.thresholds;
        let page = &mut self.pages[active];

        if scroll.visible_fraction(layout.headline) >= thresholds.headline {
            page.headline.trigger();
            if reduced {
                page.headline.complete();
            }
        }

        let info_visible = scroll.visible_fraction(layout.info);
        if info_visible >= thresholds.section {
            page.info.trigger();
            if reduced {
                page.info.complete();
            }
        }
        if scroll.visible_fraction(layout.story) >= thresholds.section {
            page.story.trigger();
            if reduced {
                page.story.complete();
            }
        }

        // Counters start once their row has revealed with most of the info
        // section on screen.
        if info_visible >= thresholds.counter {
            for index in 0..page.info.child_count() {
                if page.info.is_child_revealed(index)
                    && let Some(counter) = page.counters[index].as_mut()
                {
                    counter.trigger();
                    if reduced {
                        counter.complete();
                    }
                }
            }
        }
    }

    fn on_project_activated(&mut self, index: usize) {
        self.scroll.to_top();
        self.layout = None;
        self.pages[index].rearm();
        let name = self.pages[index].project().name;
        self.set_status(format!("{name} ({}/{})", index + 1, PROJECT_COUNT));
    }

    /// Collapse the pending switch immediately when motion is reduced.
    fn finish_switch_if_reduced(&mut self) {
        if self.options.reduced_motion
            && let Some(index) = self.navigator.complete_pending()
        {
            self.on_project_activated(index);
        }
    }

    // --- accessors ---

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    #[must_use]
    pub fn masthead(&self) -> &Typewriter {
        &self.masthead
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn active_page(&self) -> &ProjectPage {
        &self.pages[self.navigator.active_project()]
    }

    #[must_use]
    pub fn page(&self, index: usize) -> &ProjectPage {
        &self.pages[index]
    }

    /// Name shown in the masthead: always the active project's entry from
    /// the fixed name table.
    #[must_use]
    pub fn current_project_name(&self) -> &'static str {
        content::project_names()[self.navigator.active_project()]
    }

    #[must_use]
    pub fn scroll(&self) -> &PageScroll {
        &self.scroll
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// The renderer reports the measured page extents after each draw.
    pub fn record_layout(&mut self, viewport: u16, layout: PageLayout) {
        self.scroll.set_extents(viewport, layout.content_rows);
        self.layout = Some(layout);
    }

    // --- browse surface ---

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down(1);
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll.page_up();
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll.page_down();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.to_bottom();
    }

    pub fn project_next(&mut self) {
        self.navigator.next();
        self.finish_switch_if_reduced();
    }

    pub fn project_prev(&mut self) {
        self.navigator.prev();
        self.finish_switch_if_reduced();
    }

    pub fn show_project(&mut self, index: usize) {
        self.navigator.show_project(index);
        self.finish_switch_if_reduced();
    }

    pub fn carousel_next(&mut self) {
        let active = self.navigator.active_project();
        if let Some(carousel) = &mut self.pages[active].carousel {
            carousel.next();
        }
    }

    pub fn carousel_prev(&mut self) {
        let active = self.navigator.active_project();
        if let Some(carousel) = &mut self.pages[active].carousel {
            carousel.prev();
        }
    }

    /// Indicator jump on the active page; out-of-range indicators are
    /// simply absent and ignored.
    pub fn carousel_select(&mut self, index: usize) {
        let active = self.navigator.active_project();
        if let Some(carousel) = &mut self.pages[active].carousel
            && index < carousel.slide_count()
        {
            carousel.select(index);
        }
    }

    // --- menu surface ---

    pub fn open_menu(&mut self) {
        self.navigator.open_menu();
        self.mode = InputMode::Menu;
    }

    pub fn menu_up(&mut self) {
        self.navigator.menu_up();
    }

    pub fn menu_down(&mut self) {
        self.navigator.menu_down();
    }

    pub fn menu_confirm(&mut self) {
        self.navigator.menu_confirm();
        self.mode = InputMode::Browse;
        self.finish_switch_if_reduced();
    }

    pub fn menu_select(&mut self, index: usize) {
        self.navigator.menu_select(index);
        self.mode = InputMode::Browse;
        self.finish_switch_if_reduced();
    }

    /// Escape, or any input that lands outside the menu, closes it.
    pub fn close_menu(&mut self) {
        self.navigator.close_menu();
        self.mode = InputMode::Browse;
    }

    // --- contact surface ---

    pub fn open_contact(&mut self) {
        self.mode = InputMode::Contact;
    }

    pub fn close_contact(&mut self) {
        self.mode = InputMode::Browse;
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactField;

    const FRAME: Duration = Duration::from_millis(50);

    fn test_app() -> App {
        App::new(None)
    }

    /// A layout where every section sits inside a 40-row viewport.
    fn everything_visible() -> PageLayout {
        PageLayout {
            content_rows: 40,
            headline: RowSpan { top: 0, height: 2 },
            info: RowSpan { top: 10, height: 8 },
            story: RowSpan { top: 20, height: 10 },
        }
    }

    fn settle_transition(app: &mut App) {
        for _ in 0..40 {
            app.advance(FRAME);
            if !app.navigator().is_transitioning() {
                break;
            }
        }
    }

    #[test]
    fn starts_on_the_first_project() {
        let app = test_app();
        assert_eq!(app.navigator().active_project(), 0);
        assert_eq!(app.current_project_name(), "Sky Garden Residence");
        assert_eq!(app.mode(), InputMode::Browse);
    }

    #[test]
    fn arrow_navigation_is_circular() {
        let mut app = test_app();
        for expected in [1, 2, 3, 4, 5, 0] {
            app.project_next();
            settle_transition(&mut app);
            assert_eq!(app.navigator().active_project(), expected);
        }
        app.project_prev();
        settle_transition(&mut app);
        assert_eq!(app.navigator().active_project(), 5);
    }

    #[test]
    fn activation_updates_name_and_status() {
        let mut app = test_app();
        app.show_project(3);
        settle_transition(&mut app);
        assert_eq!(app.current_project_name(), "Bamboo Meditation Hall");
        assert_eq!(app.status_message(), Some("Bamboo Meditation Hall (4/6)"));
    }

    #[test]
    fn sections_reveal_once_visible() {
        let mut app = test_app();
        app.record_layout(40, everything_visible());
        app.advance(FRAME);
        let page = app.active_page();
        assert!(page.info().is_triggered());
        assert!(page.story().is_triggered());
        assert!(page.headline().is_triggered());
    }

    #[test]
    fn offscreen_sections_stay_hidden() {
        let mut app = test_app();
        let layout = PageLayout {
            content_rows: 200,
            headline: RowSpan { top: 0, height: 2 },
            info: RowSpan { top: 100, height: 8 },
            story: RowSpan { top: 150, height: 10 },
        };
        app.record_layout(40, layout);
        app.advance(FRAME);
        let page = app.active_page();
        assert!(!page.info().is_triggered());
        assert!(!page.story().is_triggered());
    }

    #[test]
    fn scrolling_into_view_triggers_the_reveal() {
        let mut app = test_app();
        let layout = PageLayout {
            content_rows: 200,
            headline: RowSpan { top: 0, height: 2 },
            info: RowSpan { top: 60, height: 10 },
            story: RowSpan { top: 150, height: 10 },
        };
        app.record_layout(40, layout);
        app.advance(FRAME);
        assert!(!app.active_page().info().is_triggered());

        // bring 40% of the info section into the viewport
        for _ in 0..24 {
            app.scroll_down();
        }
        app.advance(FRAME);
        assert!(app.active_page().info().is_triggered());
        assert!(!app.active_page().story().is_triggered());
    }

    #[test]
    fn switching_projects_rearms_the_incoming_page() {
        let mut app = test_app();
        app.record_layout(40, everything_visible());
        app.advance(FRAME);

        // reveal project 3 once
        app.show_project(3);
        settle_transition(&mut app);
        app.record_layout(40, everything_visible());
        app.advance(FRAME);
        assert!(app.page(3).info().is_triggered());

        // leaving keeps the settled pose; re-arming happens on activation
        app.show_project(0);
        settle_transition(&mut app);
        assert!(app.page(3).info().is_triggered());

        app.show_project(3);
        settle_transition(&mut app);
        // freshly activated, before any layout report: hidden pose
        assert!(!app.page(3).info().is_triggered());
        app.record_layout(40, everything_visible());
        app.advance(FRAME);
        assert!(app.page(3).info().is_triggered());
    }

    #[test]
    fn keyboard_scenario_three_rights_then_reveal() {
        let mut app = test_app();
        app.project_next();
        app.project_prev();
        app.project_next();
        // rapid presses retarget; settle on the final destination
        settle_transition(&mut app);
        app.project_next();
        settle_transition(&mut app);
        app.project_next();
        settle_transition(&mut app);
        assert_eq!(app.navigator().active_project(), 3);

        app.record_layout(40, everything_visible());
        let page_details = app.page(3).project().details.len();
        // run out the full stagger window
        let window = Duration::from_millis(600) + Duration::from_millis(200) * page_details as u32;
        let mut elapsed = Duration::ZERO;
        while elapsed < window + FRAME {
            app.advance(FRAME);
            elapsed += FRAME;
        }
        assert!(app.page(3).info().is_settled());
    }

    #[test]
    fn counters_run_after_their_rows_reveal() {
        let mut app = test_app();
        app.record_layout(40, everything_visible());
        app.advance(FRAME);
        // let the stagger and counters run out
        for _ in 0..200 {
            app.advance(FRAME);
        }
        let page = app.active_page();
        let project = page.project();
        for (index, detail) in project.details.iter().enumerate() {
            if let Some(stat) = detail.stat {
                let counter = page.counter(index).expect("counter for stat row");
                assert_eq!(counter.current(), stat.value);
            } else {
                assert!(page.counter(index).is_none());
            }
        }
    }

    #[test]
    fn carousel_keys_act_on_the_active_page() {
        let mut app = test_app();
        app.carousel_next();
        assert_eq!(app.active_page().carousel().unwrap().active_slide(), 1);
        app.carousel_prev();
        assert_eq!(app.active_page().carousel().unwrap().active_slide(), 0);
        app.carousel_select(2);
        assert_eq!(app.active_page().carousel().unwrap().active_slide(), 2);
        // out-of-range indicator clicks don't exist; ignored
        app.carousel_select(99);
        assert_eq!(app.active_page().carousel().unwrap().active_slide(), 2);
    }

    #[test]
    fn carousel_pauses_during_transitions() {
        let mut app = test_app();
        app.show_project(1);
        // mid-transition ticks must not advance project 1's carousel
        for _ in 0..4 {
            app.advance(Duration::from_millis(50));
        }
        settle_transition(&mut app);
        assert_eq!(app.page(1).carousel().unwrap().active_slide(), 0);
    }

    #[test]
    fn menu_opens_scopes_input_and_closes() {
        let mut app = test_app();
        app.open_menu();
        assert_eq!(app.mode(), InputMode::Menu);
        assert!(app.navigator().is_menu_open());

        // outside input closes it
        app.close_menu();
        assert_eq!(app.mode(), InputMode::Browse);
        assert!(!app.navigator().is_menu_open());
    }

    #[test]
    fn menu_confirm_switches_and_returns_to_browse() {
        let mut app = test_app();
        app.open_menu();
        app.menu_down();
        app.menu_down();
        app.menu_confirm();
        assert_eq!(app.mode(), InputMode::Browse);
        settle_transition(&mut app);
        assert_eq!(app.navigator().active_project(), 2);
    }

    #[test]
    fn reduced_motion_switches_and_reveals_instantly() {
        let config: VitrineConfig =
            toml::from_str("[app]\nreduced_motion = true\n").unwrap();
        let mut app = App::new(Some(&config));
        app.show_project(4);
        assert_eq!(app.navigator().active_project(), 4);
        assert!(!app.navigator().is_transitioning());

        app.record_layout(40, everything_visible());
        app.advance(FRAME);
        assert!(app.active_page().info().is_settled());
        assert!(app.active_page().headline().is_complete());
    }

    #[test]
    fn contact_overlay_owns_input_while_open() {
        let mut app = test_app();
        app.open_contact();
        assert_eq!(app.mode(), InputMode::Contact);
        app.contact_mut().push_char('A');
        assert_eq!(app.contact().value(ContactField::Name), "A");
        app.close_contact();
        assert_eq!(app.mode(), InputMode::Browse);
    }

    #[test]
    fn masthead_types_in_on_startup() {
        let mut app = test_app();
        assert_eq!(app.masthead().visible(), "");
        // lead-in 500ms + 7 chars at 100ms
        app.advance(Duration::from_millis(500));
        app.advance(Duration::from_millis(700));
        assert!(app.masthead().is_complete());
        assert_eq!(app.masthead().visible(), "VITRINE");
    }
}
