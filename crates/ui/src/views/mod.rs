mod home;
mod join;
mod not_found;
mod result;
mod staff;
mod state;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use join::{JoinView, ScanView};
pub use not_found::NotFoundView;
pub use result::ResultView;
pub use staff::{AdminView, FacilitatorView, HrView, HseView};
pub use state::{ViewError, ViewState, view_state_from_resource};
