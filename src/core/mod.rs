/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod client;
pub mod endpoints;
pub mod errors;
pub mod filter;
pub mod json;
pub mod prefix_type;
pub mod render;
pub mod results;
pub mod service_area;
pub mod source;
pub mod views;
