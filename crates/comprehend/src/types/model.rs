//! Importing custom models from other accounts

use super::Tag;

shape! {
    /// Request of `ImportModel`.
    pub struct ImportModelRequest => ImportModelRequestBuilder {
        /// ARN of the model to copy
        source_model_arn: String,
        /// Name of the imported model
        model_name: String,
        /// Version name of the imported model
        version_name: String,
        /// KMS key of the imported model
        model_kms_key_id: String,
        /// Role granting access to the KMS key
        data_access_role_arn: String,
        /// Tags for the imported model
        tags: Vec<Tag>,
    }
}

shape! {
    /// Response of `ImportModel`.
    pub struct ImportModelResponse => ImportModelResponseBuilder {
        /// ARN of the imported model
        model_arn: String,
    }
}
