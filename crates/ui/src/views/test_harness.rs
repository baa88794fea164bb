use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use learn_core::model::{Course, LessonTotal};
use learn_core::time::fixed_clock;
use learn_core::ProgressState;
use services::ProgressService;
use storage::repository::KeyValueStore;

use crate::context::{PageLayout, UiApp, build_app_context};
use crate::views::{
    CourseView, ProgressView, ToastHost, TrackerIntent, use_tracker_provider,
};

pub const TWO_WEEK_COURSE: &str = r#"{
    "title": "Test Course",
    "weeks": [
        { "title": "Foundations", "description": "Start **here**", "lessons": [
            { "title": "Intro", "icon": "📘" }, { "title": "Tensors" }, { "title": "Gradients" }
        ]},
        { "lessons": [
            { "title": "Attention" }, { "title": "Transformers" }, { "title": "Fine-tuning" }
        ]}
    ]
}"#;

#[derive(Clone)]
struct TestApp {
    progress_service: Arc<ProgressService>,
    initial_state: ProgressState,
    export_dir: PathBuf,
    layout: PageLayout,
}

impl UiApp for TestApp {
    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }

    fn initial_state(&self) -> ProgressState {
        self.initial_state.clone()
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    fn layout(&self) -> PageLayout {
        self.layout
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Course,
    Progress,
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<TrackerIntent>>>>,
}

impl HarnessHandles {
    pub fn dispatch(&self) -> Callback<TrackerIntent> {
        self.dispatch
            .borrow()
            .clone()
            .expect("dispatch registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let (_, dispatcher) = use_tracker_provider(&ctx);
    use_context_provider(|| props.view);

    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatcher.dispatch);
    }

    rsx! {
        Router::<TestRoute> {}
        ToastHost {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Course => rsx! { CourseView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<dyn KeyValueStore>,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: TrackerIntent) {
        self.handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending tasks until the rendered page contains `needle`.
    pub async fn drive_until_rendered(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            self.drive_async().await;
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
        }
        self.render()
    }

    /// Let freshly spawned tasks run without moving the clock.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            drive_dom(&mut self.dom);
            tokio::task::yield_now().await;
        }
        drive_dom(&mut self.dom);
    }

    /// Move a paused clock forward and run whatever timers fired.
    pub async fn advance(&mut self, by: std::time::Duration) {
        tokio::time::advance(by).await;
        self.settle().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(
    view: ViewKind,
    store: Arc<dyn KeyValueStore>,
    layout: PageLayout,
    export_dir: PathBuf,
) -> ViewHarness {
    let course = Course::from_json(TWO_WEEK_COURSE).expect("course json");
    let progress_service = Arc::new(ProgressService::new(fixed_clock(), Arc::clone(&store)));
    let initial_state = progress_service.open(course, LessonTotal::Derived).await;

    let app = Arc::new(TestApp {
        progress_service,
        initial_state,
        export_dir,
        layout,
    });
    let handles = HarnessHandles::default();

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                view,
                handles: handles.clone(),
            },
        ),
        store,
        handles,
    };
    harness.rebuild();
    harness
}
