use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError, RemoteCollection, RequestHandle};
use crate::config::AppConfig;
use crate::session::SessionContext;

/// Outcome of fetching a collection. `Empty` (the server has no rows) is kept
/// apart from `Failed` so neither renders as the other.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<R> {
    Idle,
    Loading,
    Loaded(Rc<Vec<R>>),
    Empty,
    Failed(String),
}

impl<R> LoadState<R> {
    /// `None` for aborted requests, which must not touch state.
    pub fn from_result(result: Result<Vec<R>, ApiError>) -> Option<Self> {
        match result {
            Ok(rows) if rows.is_empty() => Some(LoadState::Empty),
            Ok(rows) => Some(LoadState::Loaded(Rc::new(rows))),
            Err(ApiError::Aborted) => None,
            Err(e) => Some(LoadState::Failed(e.to_string())),
        }
    }

    pub fn rows(&self) -> &[R] {
        match self {
            LoadState::Loaded(rows) => rows.as_slice(),
            _ => &[],
        }
    }
}

/// What a finished list request asks of the caller.
#[derive(Debug, PartialEq)]
pub struct Settled<R> {
    /// The server rejected the token.
    pub invalidate_session: bool,
    pub next: Option<LoadState<R>>,
}

pub fn settle<R>(result: Result<Vec<R>, ApiError>) -> Settled<R> {
    Settled {
        invalidate_session: matches!(result, Err(ApiError::Unauthorized)),
        next: LoadState::from_result(result),
    }
}

/// Monotonic request counter. Only the most recently issued ticket is
/// current; retiring bumps the counter so no outstanding ticket is.
#[derive(Debug, Default)]
pub struct Generation {
    current: Cell<u64>,
}

impl Generation {
    pub fn issue(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.get() == ticket
    }

    pub fn retire(&self) {
        self.current.set(self.current.get() + 1);
    }
}

/// Flag cleared when the calling component unmounts, for async work that is
/// not tied to an abortable request.
#[hook]
pub fn use_mounted() -> Rc<RefCell<bool>> {
    let mounted = use_mut_ref(|| true);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                *mounted.borrow_mut() = true;
                move || *mounted.borrow_mut() = false
            },
            (),
        );
    }
    mounted
}

pub struct RemoteList<R> {
    pub state: LoadState<R>,
    pub reload: Callback<()>,
}

/// Fetches `R`'s collection on mount and whenever `reload` is emitted.
///
/// Each fetch is aborted when superseded or when the component unmounts, and
/// only the most recently issued request may write the state.
#[hook]
pub fn use_remote_list<R>() -> RemoteList<R>
where
    R: RemoteCollection + Clone + PartialEq,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_context::<SessionContext>();
    let state = use_state(|| LoadState::<R>::Idle);
    let generation = use_memo(|_| Generation::default(), ());
    let reloads = use_state(|| 0u32);

    {
        let state = state.clone();
        let generation = generation.clone();

        use_effect_with_deps(
            move |_| {
                let issued = generation.issue();
                let handle = RequestHandle::new();
                let signal = handle.signal();
                let client = ApiClient::new(&config, session.as_ref().and_then(|s| s.token()));
                state.set(LoadState::Loading);

                {
                    let generation = generation.clone();
                    spawn_local(async move {
                        let result = client.list::<R>(signal.as_ref()).await;
                        if !generation.is_current(issued) {
                            tracing::debug!(path = R::PATH, "discarding superseded response");
                            return;
                        }

                        match &result {
                            Ok(rows) => tracing::info!(path = R::PATH, rows = rows.len(), "list loaded"),
                            Err(ApiError::Aborted) => tracing::debug!(path = R::PATH, "list fetch aborted"),
                            Err(ApiError::Unauthorized) => tracing::warn!(path = R::PATH, "token rejected"),
                            Err(e) => tracing::error!(path = R::PATH, error = %e, "list fetch failed"),
                        }

                        let settled = settle(result);
                        if settled.invalidate_session {
                            if let Some(session) = &session {
                                session.invalidate();
                            }
                        }
                        if let Some(next) = settled.next {
                            state.set(next);
                        }
                    });
                }

                move || {
                    generation.retire();
                    drop(handle);
                }
            },
            *reloads,
        );
    }

    let reload = {
        let reloads = reloads.clone();
        Callback::from(move |_| reloads.set(reloads.wrapping_add(1)))
    };

    RemoteList {
        state: (*state).clone(),
        reload,
    }
}
