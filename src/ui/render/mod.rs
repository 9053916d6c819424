mod all;
mod footer;
mod log;
mod movie_list;
mod navbar;

use self::log::log;
use super::*;
use footer::footer;
use movie_list::movie_list;
use navbar::navbar;

pub use all::all as render;
