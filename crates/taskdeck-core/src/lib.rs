pub mod actions;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod render;
pub mod state;
pub mod transport;
pub mod view;

pub use actions::{
  Action,
  perform
};
pub use api::TaskApi;
pub use config::ClientConfig;
pub use controller::Dashboard;
pub use error::ApiError;
pub use state::{
  DashboardState,
  FieldEdit,
  Msg
};
pub use transport::{
  HttpRequest,
  HttpResponse,
  Method,
  Transport,
  TransportError
};
pub use view::{
  ActiveTab,
  Theme
};
