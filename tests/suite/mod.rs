mod equivalence;
mod scenarios;
