mod cat;
mod ltip;
mod pgr;
mod risco;
mod setor;
mod unidade;

pub use cat::{CatCommands, CatFileArgs};
pub use ltip::LtipCommands;
pub use pgr::{PgrCommands, PgrFileArgs};
pub use risco::RiscoCommands;
pub use setor::SetorCommands;
pub use unidade::UnidadeCommands;
