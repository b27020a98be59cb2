//! Flywheels: managed retraining of custom models

use super::{
    DocumentClassifierMode, EntityTypesListItem, LanguageCode, Tag, Timestamp, VpcConfig,
};

string_enum! {
    /// Kind of model a flywheel trains.
    pub enum ModelType {
        /// Document classifier
        DocumentClassifier = "DOCUMENT_CLASSIFIER",
        /// Entity recognizer
        EntityRecognizer = "ENTITY_RECOGNIZER",
    }
}

string_enum! {
    /// State of a flywheel.
    pub enum FlywheelStatus {
        /// Being created
        Creating = "CREATING",
        /// Ready
        Active = "ACTIVE",
        /// Being updated
        Updating = "UPDATING",
        /// Being deleted
        Deleting = "DELETING",
        /// Creation failed
        Failed = "FAILED",
    }
}

string_enum! {
    /// State of one flywheel iteration.
    pub enum FlywheelIterationStatus {
        /// Training a new model version
        Training = "TRAINING",
        /// Evaluating the new version
        Evaluating = "EVALUATING",
        /// Finished
        Completed = "COMPLETED",
        /// Failed
        Failed = "FAILED",
        /// A stop was requested
        StopRequested = "STOP_REQUESTED",
        /// Stopped
        Stopped = "STOPPED",
    }
}

shape! {
    /// Classification settings of a flywheel.
    pub struct DocumentClassificationConfig => DocumentClassificationConfigBuilder {
        /// Class or label mode
        mode: DocumentClassifierMode,
        /// Labels to train on
        labels: Vec<String>,
    }
}

shape! {
    /// Recognition settings of a flywheel.
    pub struct EntityRecognitionConfig => EntityRecognitionConfigBuilder {
        /// Entity types to train on
        entity_types: Vec<EntityTypesListItem>,
    }
}

shape! {
    /// What the models of a flywheel do.
    pub struct TaskConfig => TaskConfigBuilder {
        /// Language of the training data
        language_code: LanguageCode,
        /// Settings for classifier flywheels
        document_classification_config: DocumentClassificationConfig,
        /// Settings for recognizer flywheels
        entity_recognition_config: EntityRecognitionConfig,
    }
}

shape! {
    /// Encryption and network settings of a flywheel.
    pub struct DataSecurityConfig => DataSecurityConfigBuilder {
        /// KMS key of trained models
        model_kms_key_id: String,
        /// KMS key of training volumes
        volume_kms_key_id: String,
        /// KMS key of the data lake
        data_lake_kms_key_id: String,
        /// VPC of training jobs
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Security settings that can change after creation.
    pub struct UpdateDataSecurityConfig => UpdateDataSecurityConfigBuilder {
        /// KMS key of trained models
        model_kms_key_id: String,
        /// KMS key of training volumes
        volume_kms_key_id: String,
        /// VPC of training jobs
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Everything known about a flywheel.
    pub struct FlywheelProperties => FlywheelPropertiesBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Model version currently active
        active_model_arn: String,
        /// Role granting access to the data lake
        data_access_role_arn: String,
        /// Task settings
        task_config: TaskConfig,
        /// S3 location of the data lake
        data_lake_s3_uri: String,
        /// Security settings
        data_security_config: DataSecurityConfig,
        /// State
        status: FlywheelStatus,
        /// Kind of model
        model_type: ModelType,
        /// Failure detail
        message: String,
        /// When the flywheel was created
        creation_time: Timestamp,
        /// When the flywheel was last changed
        last_modified_time: Timestamp,
        /// Most recent iteration id
        latest_flywheel_iteration: String,
    }
}

shape! {
    /// Summary of a flywheel in a list.
    pub struct FlywheelSummary => FlywheelSummaryBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Model version currently active
        active_model_arn: String,
        /// S3 location of the data lake
        data_lake_s3_uri: String,
        /// State
        status: FlywheelStatus,
        /// Kind of model
        model_type: ModelType,
        /// Failure detail
        message: String,
        /// When the flywheel was created
        creation_time: Timestamp,
        /// When the flywheel was last changed
        last_modified_time: Timestamp,
        /// Most recent iteration id
        latest_flywheel_iteration: String,
    }
}

shape! {
    /// Filter for `ListFlywheels`.
    pub struct FlywheelFilter => FlywheelFilterBuilder {
        /// Only flywheels in this state
        status: FlywheelStatus,
        /// Only flywheels created after this time
        creation_time_after: Timestamp,
        /// Only flywheels created before this time
        creation_time_before: Timestamp,
    }
}

shape! {
    /// Filter for `ListFlywheelIterationHistory`.
    pub struct FlywheelIterationFilter => FlywheelIterationFilterBuilder {
        /// Only iterations created after this time
        creation_time_after: Timestamp,
        /// Only iterations created before this time
        creation_time_before: Timestamp,
    }
}

shape! {
    /// Averaged quality metrics of a model version.
    pub struct FlywheelModelEvaluationMetrics => FlywheelModelEvaluationMetricsBuilder {
        /// Mean F1 score
        #[serde(rename = "AverageF1Score")]
        average_f1_score: f64,
        /// Mean precision
        average_precision: f64,
        /// Mean recall
        average_recall: f64,
        /// Mean accuracy
        average_accuracy: f64,
    }
}

shape! {
    /// Everything known about one flywheel iteration.
    pub struct FlywheelIterationProperties => FlywheelIterationPropertiesBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Iteration id
        flywheel_iteration_id: String,
        /// When the iteration started
        creation_time: Timestamp,
        /// When the iteration finished
        end_time: Timestamp,
        /// State
        status: FlywheelIterationStatus,
        /// Failure detail
        message: String,
        /// Model version evaluated against
        evaluated_model_arn: String,
        /// Metrics of the evaluated version
        evaluated_model_metrics: FlywheelModelEvaluationMetrics,
        /// Model version trained by this iteration
        trained_model_arn: String,
        /// Metrics of the trained version
        trained_model_metrics: FlywheelModelEvaluationMetrics,
        /// S3 prefix of the evaluation manifest
        evaluation_manifest_s3_prefix: String,
    }
}

shape! {
    /// Request of `CreateFlywheel`.
    pub struct CreateFlywheelRequest => CreateFlywheelRequestBuilder {
        /// Flywheel name
        flywheel_name: String,
        /// Existing model version to start from
        active_model_arn: String,
        /// Role granting access to the data lake
        data_access_role_arn: String,
        /// Task settings, required without `active_model_arn`
        task_config: TaskConfig,
        /// Kind of model, required without `active_model_arn`
        model_type: ModelType,
        /// S3 location of the data lake
        data_lake_s3_uri: String,
        /// Security settings
        data_security_config: DataSecurityConfig,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// Tags for the flywheel
        tags: Vec<Tag>,
    }
}

shape! {
    /// Response of `CreateFlywheel`.
    pub struct CreateFlywheelResponse => CreateFlywheelResponseBuilder {
        /// ARN of the new flywheel
        flywheel_arn: String,
        /// Active model version
        active_model_arn: String,
    }
}

shape! {
    /// Request of `DescribeFlywheel`.
    pub struct DescribeFlywheelRequest => DescribeFlywheelRequestBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
    }
}

shape! {
    /// Response of `DescribeFlywheel`.
    pub struct DescribeFlywheelResponse => DescribeFlywheelResponseBuilder {
        /// Flywheel properties
        flywheel_properties: FlywheelProperties,
    }
}

shape! {
    /// Request of `ListFlywheels`.
    pub struct ListFlywheelsRequest => ListFlywheelsRequestBuilder {
        /// Filter
        filter: FlywheelFilter,
        /// Token from the previous page
        next_token: String,
        /// Page size
        max_results: i32,
    }
}

shape! {
    /// Response of `ListFlywheels`.
    pub struct ListFlywheelsResponse => ListFlywheelsResponseBuilder {
        /// Flywheels on this page
        flywheel_summary_list: Vec<FlywheelSummary>,
        /// Token for the next page
        next_token: String,
    }
}

paginated!(
    ListFlywheelsRequest => ListFlywheelsResponse,
    flywheel_summary_list: FlywheelSummary
);

shape! {
    /// Request of `UpdateFlywheel`.
    pub struct UpdateFlywheelRequest => UpdateFlywheelRequestBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Model version to activate
        active_model_arn: String,
        /// Role granting access to the data lake
        data_access_role_arn: String,
        /// Security settings
        data_security_config: UpdateDataSecurityConfig,
    }
}

shape! {
    /// Response of `UpdateFlywheel`.
    pub struct UpdateFlywheelResponse => UpdateFlywheelResponseBuilder {
        /// Flywheel properties after the update
        flywheel_properties: FlywheelProperties,
    }
}

shape! {
    /// Request of `DeleteFlywheel`.
    pub struct DeleteFlywheelRequest => DeleteFlywheelRequestBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
    }
}

shape! {
    /// Response of `DeleteFlywheel`.
    pub struct DeleteFlywheelResponse => DeleteFlywheelResponseBuilder {}
}

shape! {
    /// Request of `StartFlywheelIteration`.
    pub struct StartFlywheelIterationRequest => StartFlywheelIterationRequestBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Idempotency token chosen by the caller
        client_request_token: String,
    }
}

shape! {
    /// Response of `StartFlywheelIteration`.
    pub struct StartFlywheelIterationResponse => StartFlywheelIterationResponseBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Id of the new iteration
        flywheel_iteration_id: String,
    }
}

shape! {
    /// Request of `DescribeFlywheelIteration`.
    pub struct DescribeFlywheelIterationRequest => DescribeFlywheelIterationRequestBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Iteration id
        flywheel_iteration_id: String,
    }
}

shape! {
    /// Response of `DescribeFlywheelIteration`.
    pub struct DescribeFlywheelIterationResponse => DescribeFlywheelIterationResponseBuilder {
        /// Iteration properties
        flywheel_iteration_properties: FlywheelIterationProperties,
    }
}

shape! {
    /// Request of `ListFlywheelIterationHistory`.
    pub struct ListFlywheelIterationHistoryRequest => ListFlywheelIterationHistoryRequestBuilder {
        /// Flywheel ARN
        flywheel_arn: String,
        /// Filter
        filter: FlywheelIterationFilter,
        /// Token from the previous page
        next_token: String,
        /// Page size
        max_results: i32,
    }
}

shape! {
    /// Response of `ListFlywheelIterationHistory`.
    pub struct ListFlywheelIterationHistoryResponse => ListFlywheelIterationHistoryResponseBuilder {
        /// Iterations on this page
        flywheel_iteration_properties_list: Vec<FlywheelIterationProperties>,
        /// Token for the next page
        next_token: String,
    }
}

paginated!(
    ListFlywheelIterationHistoryRequest => ListFlywheelIterationHistoryResponse,
    flywheel_iteration_properties_list: FlywheelIterationProperties
);
