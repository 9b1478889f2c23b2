//! Fetch-and-filter views.
//!
//! A view owns its own result state. Every filter change or refresh starts a
//! fresh fetch; the previous in-flight fetch is cancelled and, should it still
//! complete, its result is dropped because its generation is no longer the
//! latest.

use crate::core::order::{decode_order_entry, MenuLookup};
use crate::domain::model::{
    DecodedOrder, DurationFilter, ListResponse, MenuEntry, MenuFilter, ReservationEntry,
};
use crate::domain::ports::RestoApi;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;

pub const MENU_FETCH_FAILED: &str = "Gagal mengambil data menu";
pub const RESERVATION_FETCH_FAILED: &str = "Gagal mengambil data reservasi";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuPage {
    pub filter: MenuFilter,
    pub response: ListResponse<MenuEntry>,
}

#[derive(Debug, Clone)]
pub struct ReservationPage {
    pub filter: DurationFilter,
    pub response: ListResponse<ReservationEntry>,
    pub lookup: MenuLookup,
}

impl ReservationPage {
    pub fn decoded_orders(&self, reservation: &ReservationEntry) -> Vec<DecodedOrder> {
        reservation
            .ordered_menu
            .iter()
            .map(|entry| decode_order_entry(entry, &self.lookup))
            .collect()
    }
}

/// Produces one page of a view for a given filter.
#[async_trait]
pub trait PageLoader: Send + Sync + 'static {
    type Filter: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;
    type Page: Clone + Send + Sync + 'static;

    async fn load(&self, filter: Self::Filter) -> ViewState<Self::Page>;
}

pub struct MenuView {
    api: Arc<dyn RestoApi>,
}

impl MenuView {
    pub fn new(api: Arc<dyn RestoApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PageLoader for MenuView {
    type Filter = MenuFilter;
    type Page = MenuPage;

    async fn load(&self, filter: MenuFilter) -> ViewState<MenuPage> {
        match self.api.fetch_menu(filter).await {
            Ok(response) => ViewState::Loaded(MenuPage { filter, response }),
            Err(e) => {
                tracing::warn!("Menu fetch failed ({:?}): {}", filter, e);
                ViewState::Failed(MENU_FETCH_FAILED.to_string())
            }
        }
    }
}

pub struct ReservationView {
    api: Arc<dyn RestoApi>,
}

impl ReservationView {
    pub fn new(api: Arc<dyn RestoApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PageLoader for ReservationView {
    type Filter = DurationFilter;
    type Page = ReservationPage;

    async fn load(&self, filter: DurationFilter) -> ViewState<ReservationPage> {
        let response = match self.api.fetch_reservations(filter).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Reservation fetch failed ({:?}): {}", filter, e);
                return ViewState::Failed(RESERVATION_FETCH_FAILED.to_string());
            }
        };

        // Only feeds the order-entry lookup; names fall back to "Menu #<id>".
        let lookup = match self.api.fetch_menu(MenuFilter::All).await {
            Ok(menu) => MenuLookup::from_entries(menu.data),
            Err(e) => {
                tracing::warn!("Menu lookup fetch failed, using fallback names: {}", e);
                MenuLookup::default()
            }
        };

        ViewState::Loaded(ReservationPage {
            filter,
            response,
            lookup,
        })
    }
}

struct Slot<L: PageLoader> {
    generation: u64,
    filter: L::Filter,
    state: ViewState<L::Page>,
    in_flight: Option<CancellationToken>,
}

/// Owns the state of one view and the fetch that feeds it.
pub struct ViewController<L: PageLoader> {
    loader: Arc<L>,
    slot: Arc<Mutex<Slot<L>>>,
    settled: Arc<watch::Sender<u64>>,
    shutdown: CancellationToken,
}

impl<L: PageLoader> ViewController<L> {
    pub fn new(loader: L, filter: L::Filter) -> Self {
        let (settled, _) = watch::channel(0);
        Self {
            loader: Arc::new(loader),
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                filter,
                state: ViewState::Loading,
                in_flight: None,
            })),
            settled: Arc::new(settled),
            shutdown: CancellationToken::new(),
        }
    }

    /// Initial fetch with the filter given at construction.
    pub async fn mount(&self) {
        let mut slot = self.slot.lock().await;
        self.start(&mut slot);
    }

    /// Refetches only when the filter actually changes. Returns whether a
    /// fetch was started.
    pub async fn set_filter(&self, filter: L::Filter) -> bool {
        let mut slot = self.slot.lock().await;
        if slot.filter == filter && slot.generation > 0 {
            return false;
        }
        slot.filter = filter;
        self.start(&mut slot);
        true
    }

    pub async fn refresh(&self) {
        let mut slot = self.slot.lock().await;
        self.start(&mut slot);
    }

    pub async fn filter(&self) -> L::Filter {
        self.slot.lock().await.filter
    }

    pub async fn state(&self) -> ViewState<L::Page> {
        self.slot.lock().await.state.clone()
    }

    /// Receives the generation number of every fetch whose result was applied.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.settled.subscribe()
    }

    /// Waits until the most recently started fetch (or a newer one) has been
    /// applied, then returns the state.
    pub async fn settle(&self) -> ViewState<L::Page> {
        let target = self.slot.lock().await.generation;
        let mut rx = self.settled.subscribe();
        if rx.wait_for(|applied| *applied >= target).await.is_err() {
            tracing::debug!("View controller dropped while waiting for fetch {}", target);
        }
        self.state().await
    }

    fn start(&self, slot: &mut Slot<L>) {
        if let Some(previous) = slot.in_flight.take() {
            previous.cancel();
        }

        slot.generation += 1;
        slot.state = ViewState::Loading;

        let generation = slot.generation;
        let filter = slot.filter;
        let token = self.shutdown.child_token();
        slot.in_flight = Some(token.clone());

        let loader = Arc::clone(&self.loader);
        let shared = Arc::clone(&self.slot);
        let settled = Arc::clone(&self.settled);

        tracing::debug!("Starting fetch {} with filter {:?}", generation, filter);
        tokio::spawn(async move {
            let state = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("Fetch {} cancelled before completion", generation);
                    return;
                }
                state = loader.load(filter) => state,
            };

            let mut slot = shared.lock().await;
            if slot.generation != generation {
                tracing::debug!(
                    "Discarding result of fetch {}, fetch {} is newer",
                    generation,
                    slot.generation
                );
                return;
            }
            slot.state = state;
            slot.in_flight = None;
            drop(slot);

            settled.send_replace(generation);
        });
    }
}

impl<L: PageLoader> Drop for ViewController<L> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
