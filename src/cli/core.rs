use crate::cli;
use log::info;
use o365endpoints::{ClientBuilder, EndpointSource, FileSource, Result, View};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Build the Endpoint Source from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_source(args: &cli::Args) -> Box<dyn EndpointSource> {
    if let Some(input_file) = &args.input_file {
        return Box::new(FileSource::new(input_file));
    }

    // Environment variables first, then command-line overrides
    let mut builder = ClientBuilder::new();
    if let Some(url) = &args.url {
        builder.url(url);
    }
    if let Some(instance) = args.instance {
        builder.instance(instance);
    }
    if let Some(timeout) = args.timeout {
        builder.timeout(timeout);
    }

    let client = builder.build();
    info!(
        "Endpoint web service: {} (instance {})",
        client.url(),
        client.instance()
    );

    Box::new(client)
}

/*--------------------------------------------------------------------------------------
  Fetch a fresh directory and render one view
--------------------------------------------------------------------------------------*/

pub fn run_view(source: &dyn EndpointSource, view: View) -> Result<String> {
    info!("View {}: {}", view.number(), view.title());
    let endpoints = source.endpoints()?;
    view.apply(&endpoints)
}
