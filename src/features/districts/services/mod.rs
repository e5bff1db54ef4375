mod client_resolver;
mod geocode_client;
mod nominatim_resolver;
mod resolver;
mod static_resolver;

pub use client_resolver::ClientAssertedResolver;
pub use geocode_client::{
    NominatimClient, ReverseGeocodeAddress, ReverseGeocodeResponse, ReverseGeocoder,
};
pub use nominatim_resolver::{Clock, NominatimResolver, SystemClock};
pub use resolver::{
    from_config, DistrictResolver, Provenance, ResolveInput, Resolution,
};
pub use static_resolver::StaticBoundsResolver;
