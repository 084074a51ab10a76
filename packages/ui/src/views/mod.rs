mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod home;
pub use home::HomeView;

mod athletes;
pub use athletes::AthletesView;

mod disciplines;
pub use disciplines::DisciplinesView;

mod results;
pub use results::ResultsView;

mod products;
pub use products::ProductsView;
