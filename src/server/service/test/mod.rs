mod dashboard;
mod project;
mod seed;
