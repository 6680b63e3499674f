mod mock_lookup_gateway;

pub use mock_lookup_gateway::MockLookupGateway;
