mod helpers;

mod binding;
mod catalog;
mod instance;
