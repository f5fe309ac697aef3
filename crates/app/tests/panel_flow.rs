//! End-to-end flow of the panel against in-memory ports: navigation,
//! polling and the settings round trip.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;
use rebuilder_app::config::PanelConfig;
use rebuilder_app::generation::Ticket;
use rebuilder_app::ports::{PanelApi, Ticker};
use rebuilder_app::router::{View, ViewRouter};
use rebuilder_app::services::action_service::ActionService;
use rebuilder_app::services::settings_service::SettingsService;
use rebuilder_app::services::status_service::StatusService;
use rebuilder_domain::action::{Action, ActionRequest};
use rebuilder_domain::cube::CubeColor;
use rebuilder_domain::settings::{Settings, SettingsPayload};
use rebuilder_domain::status::StatusSnapshot;

type TickFn = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

/// Ticker that only fires when told to, and counts live timers.
#[derive(Clone, Default)]
struct TestTicker {
    created: Rc<Cell<usize>>,
    cleared: Rc<Cell<usize>>,
    latest: Rc<RefCell<Option<TickFn>>>,
}

impl TestTicker {
    fn live_timers(&self) -> usize {
        self.created.get() - self.cleared.get()
    }

    fn tick(&self) {
        let latest = self.latest.borrow().clone();
        if let Some(tick) = latest {
            if let Some(callback) = tick.borrow_mut().as_mut() {
                callback();
            }
        }
    }
}

struct TestHandle {
    cleared: Rc<Cell<usize>>,
    tick: TickFn,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        self.tick.borrow_mut().take();
        self.cleared.set(self.cleared.get() + 1);
    }
}

impl Ticker for TestTicker {
    type Handle = TestHandle;

    fn every(&self, _period: Duration, tick: Box<dyn FnMut()>) -> TestHandle {
        self.created.set(self.created.get() + 1);
        let tick: TickFn = Rc::new(RefCell::new(Some(tick)));
        *self.latest.borrow_mut() = Some(Rc::clone(&tick));
        TestHandle {
            cleared: Rc::clone(&self.cleared),
            tick,
        }
    }
}

/// Backend holding settings and a fixed status, recording actions.
#[derive(Default)]
struct FakeBackend {
    settings: RefCell<SettingsPayload>,
    status: RefCell<StatusSnapshot>,
    actions: RefCell<Vec<Action>>,
}

impl PanelApi for FakeBackend {
    fn fetch_settings(&self) -> impl Future<Output = Option<SettingsPayload>> {
        let settings = self.settings.borrow().clone();
        async { Some(settings) }
    }

    fn submit_settings(&self, settings: Settings) -> impl Future<Output = Option<String>> {
        let json = serde_json::to_string(&settings).unwrap();
        *self.settings.borrow_mut() = serde_json::from_str(&json).unwrap();
        async { Some("OK".to_string()) }
    }

    fn submit_action(&self, request: ActionRequest) -> impl Future<Output = Option<String>> {
        self.actions.borrow_mut().push(request.action);
        async { Some("OK".to_string()) }
    }

    fn fetch_status(&self) -> impl Future<Output = Option<StatusSnapshot>> {
        let status = self.status.borrow().clone();
        async { Some(status) }
    }
}

fn collect_tickets(router: &mut ViewRouter<TestTicker>) -> Rc<RefCell<Vec<Ticket>>> {
    let tickets = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&tickets);
    router.show_home(move |ticket| sink.borrow_mut().push(ticket));
    tickets
}

#[test]
fn should_leave_one_timer_after_home_settings_home() {
    let ticker = TestTicker::default();
    let config = PanelConfig::default();
    let mut router = ViewRouter::new(ticker.clone(), config.poll_interval());

    router.show_home(|_| {});
    assert_eq!(ticker.live_timers(), 1);

    router.show_settings();
    assert_eq!(ticker.live_timers(), 0);
    assert_eq!(router.active(), View::Settings);

    router.show_home(|_| {});
    assert_eq!(ticker.live_timers(), 1);
    assert_eq!(ticker.created.get(), 2);
    assert_eq!(ticker.cleared.get(), 1);
}

#[tokio::test]
async fn should_update_home_only_while_it_is_shown() {
    let backend = Rc::new(FakeBackend::default());
    *backend.status.borrow_mut() = StatusSnapshot {
        status: Some("running".to_string()),
        config: Some(vec![CubeColor::Blue, CubeColor::None]),
        steps_finished: Some(1),
        steps_total: Some(4),
        ..StatusSnapshot::default()
    };
    let status = StatusService::new(Rc::clone(&backend), Utc);
    let ticker = TestTicker::default();
    let mut router = ViewRouter::new(ticker.clone(), Duration::from_millis(1000));

    let tickets = collect_tickets(&mut router);
    ticker.tick();
    let in_time = tickets.borrow()[0].clone();
    let display = status.poll(&in_time).await.unwrap();
    assert_eq!(display.progress, "25%");
    assert_eq!(display.cubes[0].class_name(), "cube blue");

    ticker.tick();
    let late = tickets.borrow()[1].clone();
    router.show_settings();
    assert!(status.poll(&late).await.is_none());
}

#[tokio::test]
async fn should_round_trip_settings_through_form() {
    let backend = Rc::new(FakeBackend::default());
    let settings = SettingsService::new(Rc::clone(&backend));
    let ticker = TestTicker::default();
    let mut router = ViewRouter::new(ticker, Duration::from_millis(1000));

    let ticket = router.show_settings();
    let loaded = settings.load(&ticket).await.unwrap();
    assert_eq!(loaded.confidence_label(), "25 frames");
    assert_eq!(loaded.timeout_label(), "180 seconds");

    let edited = Settings {
        fast_mode: true,
        incremental_build: true,
        confidence: 12,
        recognition_timeout: 60,
        ..loaded
    };
    assert_eq!(settings.save(edited).await.as_deref(), Some("OK"));

    router.show_home(|_| {});
    let ticket = router.show_settings();
    assert_eq!(settings.load(&ticket).await, Some(edited));
}

#[tokio::test]
async fn should_send_run_control_actions() {
    let backend = Rc::new(FakeBackend::default());
    let actions = ActionService::new(Rc::clone(&backend));

    actions.trigger(Action::Init).await;
    actions.trigger(Action::Start).await;
    actions.trigger(Action::Stop).await;

    assert_eq!(
        *backend.actions.borrow(),
        vec![Action::Init, Action::Start, Action::Stop]
    );
}
