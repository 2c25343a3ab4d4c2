mod debug;
mod from_iter;
mod into;
