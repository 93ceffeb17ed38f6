//! Async driver for a single tool's lookups
//!
//! `LookupController` pairs a `Tool` with an `HttpFetcher` and owns the
//! `LookupMachine` deciding which outcomes become visible. Each `submit`
//! spawns one Tokio task; superseded tasks are not aborted, their outcomes
//! are simply discarded by the machine when they arrive.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use couteau_core::{ErrorKind, LookupMachine, LookupState, RequestId, Tool};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::fetch::HttpFetcher;

struct Shared<O> {
    machine: Mutex<LookupMachine<O>>,
    state_tx: watch::Sender<LookupState<O>>,
}

impl<O: Clone> Shared<O> {
    fn lock(&self) -> MutexGuard<'_, LookupMachine<O>> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to the machine and publish the resulting state.
    ///
    /// Publishing happens under the lock so subscribers observe transitions
    /// in the order they were made.
    fn update<R>(&self, f: impl FnOnce(&mut LookupMachine<O>) -> R) -> R {
        let mut machine = self.lock();
        let out = f(&mut machine);
        self.state_tx.send_replace(machine.state().clone());
        out
    }

    fn is_current(&self, request_id: RequestId) -> bool {
        self.lock().is_current(request_id)
    }

    fn resolve(&self, request_id: RequestId, outcome: Result<O, ErrorKind>) -> bool {
        let mut machine = self.lock();
        let accepted = machine.resolve(request_id, outcome);
        if accepted {
            self.state_tx.send_replace(machine.state().clone());
        }
        accepted
    }
}

/// Remote lookup controller for one tool
pub struct LookupController<T: Tool> {
    tool: Arc<T>,
    fetcher: Arc<dyn HttpFetcher>,
    shared: Arc<Shared<T::Output>>,
}

impl<T: Tool> LookupController<T> {
    pub fn new(tool: T, fetcher: Arc<dyn HttpFetcher>) -> Self {
        let (state_tx, _) = watch::channel(LookupState::Idle);

        Self {
            tool: Arc::new(tool),
            fetcher,
            shared: Arc::new(Shared {
                machine: Mutex::new(LookupMachine::new()),
                state_tx,
            }),
        }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Start a lookup for `raw`.
    ///
    /// Invalid input fails synchronously and returns `None` without touching
    /// the network. Otherwise the state moves to `Pending` before this returns
    /// and the handle of the spawned request task is returned. Must be called
    /// from within a Tokio runtime.
    pub fn submit(&self, raw: &str) -> Option<JoinHandle<()>> {
        let input = match self.tool.validate(raw) {
            Ok(input) => input,
            Err(reason) => {
                let request_id = self.shared.update(|m| m.reject(reason));
                log::debug!("{} #{request_id}: rejected input {raw:?}", T::NAME);
                return None;
            }
        };

        let url = self.tool.build_url(&input);
        let request_id = self.shared.update(|m| m.begin());
        log::debug!("{} #{request_id}: submitted {url}", T::NAME);

        let tool = Arc::clone(&self.tool);
        let fetcher = Arc::clone(&self.fetcher);
        let shared = Arc::clone(&self.shared);

        Some(tokio::spawn(async move {
            let fetched = fetcher.get(&url).await;

            if !shared.is_current(request_id) {
                log::debug!("{} #{request_id}: superseded, discarding", T::NAME);
                return;
            }

            let outcome = match fetched {
                Ok(payload) => tool.map(&payload).map_err(|err| {
                    log::warn!("{} #{request_id}: {err}", T::NAME);
                    err.kind()
                }),
                Err(err) => {
                    log::warn!("{} #{request_id}: {err}", T::NAME);
                    Err(ErrorKind::NetworkError)
                }
            };

            if shared.resolve(request_id, outcome) {
                log::debug!("{} #{request_id}: settled", T::NAME);
            } else {
                log::debug!("{} #{request_id}: superseded, discarding", T::NAME);
            }
        }))
    }

    /// Return to `Idle`; anything still in flight will be ignored
    pub fn reset(&self) {
        self.shared.update(|m| m.reset());
        log::debug!("{}: reset", T::NAME);
    }

    pub fn current_state(&self) -> LookupState<T::Output> {
        self.shared.state_tx.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<LookupState<T::Output>> {
        self.shared.state_tx.subscribe()
    }

    /// Wait until the state is `Succeeded` or `Failed`.
    ///
    /// Returns immediately if it already is. Never returns while the
    /// controller stays `Idle`.
    pub async fn wait_settled(&self) -> LookupState<T::Output> {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(|state| state.is_settled()).await {
            Ok(state) => state.clone(),
            Err(_) => self.current_state(),
        };
        state
    }
}
