pub mod arguments;
pub mod connectors;
pub mod errors;
pub mod methods;
pub mod options;
pub mod validator;

pub use arguments::{ExecuteArguments, ExecuteOptions, StarknetMethodArguments};
pub use connectors::{Connector, ConnectorData, ConnectorEvent, TokenboundConnector};
pub use errors::{ConnectorError, ValidationError, ValidationErrorKind};
pub use methods::StarknetMethod;
pub use options::ConnectOptions;
pub use validator::{ArgumentValidator, parse_rpc_calls, validate};
