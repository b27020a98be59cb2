//! Real-time endpoints for custom models

use super::{Tag, Timestamp};

string_enum! {
    /// Provisioning state of an endpoint.
    pub enum EndpointStatus {
        /// Being created
        Creating = "CREATING",
        /// Being deleted
        Deleting = "DELETING",
        /// Creation or update failed
        Failed = "FAILED",
        /// Serving requests
        InService = "IN_SERVICE",
        /// Being updated
        Updating = "UPDATING",
    }
}

shape! {
    /// Everything known about an endpoint.
    pub struct EndpointProperties => EndpointPropertiesBuilder {
        /// Endpoint ARN
        endpoint_arn: String,
        /// Provisioning state
        status: EndpointStatus,
        /// Failure detail
        message: String,
        /// Model currently served
        model_arn: String,
        /// Model being rolled out
        desired_model_arn: String,
        /// Requested throughput units
        desired_inference_units: i32,
        /// Provisioned throughput units
        current_inference_units: i32,
        /// When the endpoint was created
        creation_time: Timestamp,
        /// When the endpoint was last changed
        last_modified_time: Timestamp,
        /// Role used to read the model
        data_access_role_arn: String,
        /// Role being rolled out
        desired_data_access_role_arn: String,
        /// Flywheel whose active model is served
        flywheel_arn: String,
    }
}

impl EndpointProperties {
    /// Whether the endpoint accepts requests.
    pub fn is_in_service(&self) -> bool {
        self.status == Some(EndpointStatus::InService)
    }
}

shape! {
    /// Filter for `ListEndpoints`.
    pub struct EndpointFilter => EndpointFilterBuilder {
        /// Only endpoints serving this model
        model_arn: String,
        /// Only endpoints in this state
        status: EndpointStatus,
        /// Only endpoints created before this time
        creation_time_before: Timestamp,
        /// Only endpoints created after this time
        creation_time_after: Timestamp,
    }
}

shape! {
    /// Request of `CreateEndpoint`.
    pub struct CreateEndpointRequest => CreateEndpointRequestBuilder {
        /// Endpoint name
        endpoint_name: String,
        /// Model to serve
        model_arn: String,
        /// Throughput units to provision
        desired_inference_units: i32,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// Tags for the endpoint
        tags: Vec<Tag>,
        /// Role used to read the model
        data_access_role_arn: String,
        /// Flywheel whose active model is served
        flywheel_arn: String,
    }
}

shape! {
    /// Response of `CreateEndpoint`.
    pub struct CreateEndpointResponse => CreateEndpointResponseBuilder {
        /// ARN of the new endpoint
        endpoint_arn: String,
        /// Model the endpoint serves
        model_arn: String,
    }
}

shape! {
    /// Request of `DescribeEndpoint`.
    pub struct DescribeEndpointRequest => DescribeEndpointRequestBuilder {
        /// Endpoint ARN
        endpoint_arn: String,
    }
}

shape! {
    /// Response of `DescribeEndpoint`.
    pub struct DescribeEndpointResponse => DescribeEndpointResponseBuilder {
        /// Endpoint properties
        endpoint_properties: EndpointProperties,
    }
}

shape! {
    /// Request of `ListEndpoints`.
    pub struct ListEndpointsRequest => ListEndpointsRequestBuilder {
        /// Filter
        filter: EndpointFilter,
        /// Token from the previous page
        next_token: String,
        /// Page size
        max_results: i32,
    }
}

shape! {
    /// Response of `ListEndpoints`.
    pub struct ListEndpointsResponse => ListEndpointsResponseBuilder {
        /// Endpoints on this page
        endpoint_properties_list: Vec<EndpointProperties>,
        /// Token for the next page
        next_token: String,
    }
}

paginated!(
    ListEndpointsRequest => ListEndpointsResponse,
    endpoint_properties_list: EndpointProperties
);

shape! {
    /// Request of `UpdateEndpoint`.
    pub struct UpdateEndpointRequest => UpdateEndpointRequestBuilder {
        /// Endpoint ARN
        endpoint_arn: String,
        /// Model to roll out
        desired_model_arn: String,
        /// Throughput units to provision
        desired_inference_units: i32,
        /// Role to roll out
        desired_data_access_role_arn: String,
        /// Flywheel whose active model is served
        flywheel_arn: String,
    }
}

shape! {
    /// Response of `UpdateEndpoint`.
    pub struct UpdateEndpointResponse => UpdateEndpointResponseBuilder {
        /// Model being rolled out
        desired_model_arn: String,
    }
}

shape! {
    /// Request of `DeleteEndpoint`.
    pub struct DeleteEndpointRequest => DeleteEndpointRequestBuilder {
        /// Endpoint ARN
        endpoint_arn: String,
    }
}

shape! {
    /// Response of `DeleteEndpoint`.
    pub struct DeleteEndpointResponse => DeleteEndpointResponseBuilder {}
}
