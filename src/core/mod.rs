pub mod lookup;

pub use crate::domain::model::{
    AddressRecord, CepQuery, Kwargs, LookupResult, ServiceFailure, TextResponse, ToolContext,
};
pub use crate::domain::ports::{AddressService, ConfigProvider, Tool};
pub use crate::utils::error::Result;
pub use lookup::CepLookupTool;
