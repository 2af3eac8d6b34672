mod watchtime_repository;

pub use watchtime_repository::WatchtimeRepository;
