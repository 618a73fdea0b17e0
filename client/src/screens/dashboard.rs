//! Dashboard screen: aggregated spending per category.

use crate::domain::models::DashboardData;
use crate::gateway::ExpenseGateway;

/// Snapshot of the dashboard screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub dashboard: Option<DashboardData>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Everything that can happen on the dashboard screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Load,
    DismissError,
}

/// State owner for the dashboard screen.
pub struct DashboardScreen {
    gateway: ExpenseGateway,
    state: DashboardState,
}

impl DashboardScreen {
    pub fn new(gateway: ExpenseGateway) -> Self {
        Self {
            gateway,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub async fn handle(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Load => self.load().await,
            DashboardEvent::DismissError => self.state.error = None,
        }
    }

    async fn load(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;

        match self.gateway.get_dashboard().await {
            Ok(dashboard) => {
                self.state.dashboard = Some(dashboard);
                self.state.is_loading = false;
            }
            Err(error) => {
                self.state.is_loading = false;
                self.state.error = Some(error.to_string());
            }
        }
    }
}
