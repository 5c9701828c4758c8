mod message;
mod post;
mod project;
mod room;
