pub mod interactive;

use crate::core::view::{
    MenuPage, MenuView, ReservationPage, ReservationView, ViewController, ViewState,
};
use crate::domain::model::{DurationFilter, MenuFilter};
use crate::domain::ports::RestoApi;
use crate::render::cards::{
    render_landing, render_menu_state, render_reservation_state, RenderContext,
};
use crate::utils::error::Result;
use interactive::{
    parse_menu_command, parse_reservation_command, run_interactive, MENU_HELP, RESERVATION_HELP,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// The three screens of the client. Each screen call builds its own view
/// controller, so no state is shared between them.
pub struct RestoOpsApp {
    api: Arc<dyn RestoApi>,
    ctx: RenderContext,
}

impl RestoOpsApp {
    pub fn new(api: Arc<dyn RestoApi>, ctx: RenderContext) -> Self {
        Self { api, ctx }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    pub fn landing(&self) -> String {
        render_landing(&self.ctx)
    }

    pub async fn menu_once(&self, filter: MenuFilter) -> ViewState<MenuPage> {
        let controller = ViewController::new(MenuView::new(Arc::clone(&self.api)), filter);
        controller.mount().await;
        controller.settle().await
    }

    pub async fn reservations_once(&self, filter: DurationFilter) -> ViewState<ReservationPage> {
        let controller =
            ViewController::new(ReservationView::new(Arc::clone(&self.api)), filter);
        controller.mount().await;
        controller.settle().await
    }

    pub fn render_menu(&self, state: &ViewState<MenuPage>) -> String {
        render_menu_state(&self.ctx, state)
    }

    pub fn render_reservations(&self, state: &ViewState<ReservationPage>) -> String {
        render_reservation_state(&self.ctx, state)
    }

    pub async fn menu_interactive<R, W>(&self, filter: MenuFilter, input: R, out: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let controller = ViewController::new(MenuView::new(Arc::clone(&self.api)), filter);
        run_interactive(
            &controller,
            input,
            out,
            parse_menu_command,
            |state| self.render_menu(state),
            MENU_HELP,
        )
        .await
    }

    pub async fn reservations_interactive<R, W>(
        &self,
        filter: DurationFilter,
        input: R,
        out: W,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let controller =
            ViewController::new(ReservationView::new(Arc::clone(&self.api)), filter);
        run_interactive(
            &controller,
            input,
            out,
            parse_reservation_command,
            |state| self.render_reservations(state),
            RESERVATION_HELP,
        )
        .await
    }
}
