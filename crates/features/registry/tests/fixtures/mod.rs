#![allow(dead_code)]

use lingo_domain::{BundleEntries, Culture, CultureChanged, DictionaryDescriptor};
use lingo_loader::{BundleLoader, LoaderError, MemoryLoader};
use parking_lot::Mutex;
use std::sync::{Arc, mpsc};
use std::time::Duration;

pub const P1: &str = "ru/a.json";
pub const P2: &str = "en/a.json";
pub const P3: &str = "b.json";
pub const C_RU: &str = "ru/c.json";
pub const C_EN: &str = "en/c.json";

/// Upper bound for any cross-thread handshake in these tests.
pub const GATE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn culture(tag: &str) -> Culture {
    Culture::parse(tag).expect("valid culture tag")
}

/// Loader with the three bundles of the A/B scenario.
pub fn scenario_loader() -> Arc<MemoryLoader> {
    Arc::new(
        MemoryLoader::new()
            .with(P1, [("title", "Заголовок"), ("ok", "Да")])
            .with(P2, [("title", "Title"), ("ok", "Yes")])
            .with(P3, [("icon", "star")]),
    )
}

/// "A": localized ru → P1, en → P2, default ru.
pub fn dictionary_a() -> Arc<DictionaryDescriptor> {
    Arc::new(
        DictionaryDescriptor::localized("A", culture("ru"), [(culture("ru"), P1), (culture("en"), P2)])
            .expect("valid descriptor"),
    )
}

/// "B": not localized, always P3.
pub fn dictionary_b() -> Arc<DictionaryDescriptor> {
    Arc::new(DictionaryDescriptor::new("B", P3).expect("valid descriptor"))
}

/// Collects every notification an observer receives.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<CultureChanged>>>);

impl Recorder {
    pub fn observer(&self) -> impl Fn(&CultureChanged) + Send + Sync + 'static {
        let events = Arc::clone(&self.0);
        move |event: &CultureChanged| events.lock().push(event.clone())
    }

    pub fn events(&self) -> Vec<CultureChanged> {
        self.0.lock().clone()
    }
}

/// Loader that parks the first load of one path until the test releases it.
#[derive(Debug)]
pub struct GatedLoader {
    inner: MemoryLoader,
    gated: &'static str,
    entered: Mutex<Option<mpsc::Sender<()>>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl GatedLoader {
    /// Returns the loader, a receiver signalled when the gated load starts,
    /// and a sender that lets it finish.
    pub fn new(inner: MemoryLoader, gated: &'static str) -> (Self, mpsc::Receiver<()>, mpsc::Sender<()>) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let loader = Self {
            inner,
            gated,
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(release_rx),
        };
        (loader, entered_rx, release_tx)
    }
}

impl BundleLoader for GatedLoader {
    fn load(&self, path: &str) -> Result<BundleEntries, LoaderError> {
        if path == self.gated {
            let entered = self.entered.lock().take();
            if let Some(entered) = entered {
                let _ = entered.send(());
                let _ = self.release.lock().recv_timeout(GATE_TIMEOUT);
            }
        }
        self.inner.load(path)
    }
}
