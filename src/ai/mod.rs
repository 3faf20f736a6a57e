pub mod agent;
pub mod alpha_beta;
pub mod evaluation;
pub mod game_tree;
pub mod minimax;
pub mod reflex;
pub mod search;
pub mod turn_order;
