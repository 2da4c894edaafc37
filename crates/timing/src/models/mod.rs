mod finish_record;
mod gender;
mod participant;
mod race;
mod start_wave;

pub use finish_record::FinishRecord;
pub use gender::Gender;
pub use participant::Participant;
pub use race::Race;
pub use start_wave::StartWave;
