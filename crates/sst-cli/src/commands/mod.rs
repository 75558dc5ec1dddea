pub mod cat;
pub mod config;
pub mod dispatch;
pub mod ltip;
pub mod pgr;
pub mod risco;
pub mod search;
pub mod setor;
pub mod unidade;

mod shared;
