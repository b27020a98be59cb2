//! The operation catalog
//!
//! Every service operation is one row of the `operations!` table below: the
//! method name, the wire name, request and response records, the members the
//! request must carry, whether it is safe to repeat, and the service errors
//! it is documented to return. From each row the macro generates the
//! [`Operation`] impl of the request, the async method on [`Client`] and the
//! blocking method on `BlockingClient`.

use futures::future::BoxFuture;

use crate::client::Client;
use crate::error::{Error, Result, ServiceErrorKind};
use crate::observability;
use crate::operation::Operation;
use crate::types::*;

/// Static description of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationInfo {
    /// Wire operation name
    pub name: &'static str,
    /// Rust method name on the clients
    pub method: &'static str,
    /// Members the request must carry
    pub required: &'static [&'static str],
    /// Whether repeating the call verbatim is safe
    pub idempotent: bool,
    /// Documented service error kinds
    pub errors: &'static [ServiceErrorKind],
}

macro_rules! operations {
    (
        $(
            $(#[$doc:meta])*
            $method:ident => $op:ident($req:ident) -> $res:ident {
                required: [$($field:ident),* $(,)?],
                idempotent: $idempotent:literal,
                errors: [$($err:ident),* $(,)?] $(,)?
            }
        )*
    ) => {
        $(
            impl Operation for $req {
                type Output = $res;

                const NAME: &'static str = stringify!($op);
                const IDEMPOTENT: bool = $idempotent;
                const ERRORS: &'static [ServiceErrorKind] = &[$(ServiceErrorKind::$err),*];

                fn validate(&self) -> Result<()> {
                    $(
                        if self.$field.is_none() {
                            observability::log_validation_error(Self::NAME, stringify!($field));
                            return Err(Error::MissingParameter {
                                operation: Self::NAME,
                                field: stringify!($field),
                            });
                        }
                    )*
                    Ok(())
                }
            }
        )*

        /// Every catalog entry, in declaration order.
        pub static CATALOG: &[OperationInfo] = &[
            $(
                OperationInfo {
                    name: stringify!($op),
                    method: stringify!($method),
                    required: &[$(stringify!($field)),*],
                    idempotent: $idempotent,
                    errors: &[$(ServiceErrorKind::$err),*],
                },
            )*
        ];

        /// Route a JSON request to the operation called `name`.
        pub(crate) fn dispatch<'a>(
            client: &'a Client,
            name: &str,
            input: serde_json::Value,
        ) -> Option<BoxFuture<'a, Result<serde_json::Value>>> {
            match name {
                $(
                    stringify!($op) => Some(Box::pin(async move {
                        let request: $req = serde_json::from_value(input)?;
                        let output = client.execute(request).await?;
                        Ok(serde_json::to_value(output)?)
                    })),
                )*
                _ => None,
            }
        }

        impl Client {
            $(
                $(#[$doc])*
                pub async fn $method(&self, request: $req) -> Result<$res> {
                    self.execute(request).await
                }
            )*
        }

        #[cfg(feature = "blocking")]
        impl crate::blocking::BlockingClient {
            $(
                $(#[$doc])*
                ///
                /// Blocks the calling thread until the call completes.
                pub fn $method(&self, request: $req) -> Result<$res> {
                    self.execute(request)
                }
            )*
        }
    };
}

operations! {
    // Real-time detection

    /// Detect the dominant language of a text.
    detect_dominant_language => DetectDominantLanguage(DetectDominantLanguageRequest) -> DetectDominantLanguageResponse {
        required: [text],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, InternalServer],
    }

    /// Detect named entities in a text or document.
    detect_entities => DetectEntities(DetectEntitiesRequest) -> DetectEntitiesResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, ResourceUnavailable, TextSizeLimitExceeded, UnsupportedLanguage, InternalServer],
    }

    /// Detect key noun phrases in a text.
    detect_key_phrases => DetectKeyPhrases(DetectKeyPhrasesRequest) -> DetectKeyPhrasesResponse {
        required: [text, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, InternalServer],
    }

    /// Detect the prevailing sentiment of a text.
    detect_sentiment => DetectSentiment(DetectSentimentRequest) -> DetectSentimentResponse {
        required: [text, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, InternalServer],
    }

    /// Tokenize a text and tag each word with its part of speech.
    detect_syntax => DetectSyntax(DetectSyntaxRequest) -> DetectSyntaxResponse {
        required: [text, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, InternalServer],
    }

    /// Detect entities and the sentiment expressed towards each mention.
    detect_targeted_sentiment => DetectTargetedSentiment(DetectTargetedSentimentRequest) -> DetectTargetedSentimentResponse {
        required: [text, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, InternalServer],
    }

    /// Locate personally identifiable information in a text.
    detect_pii_entities => DetectPiiEntities(DetectPiiEntitiesRequest) -> DetectPiiEntitiesResponse {
        required: [text, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, InternalServer],
    }

    /// Report which kinds of PII a text contains.
    contains_pii_entities => ContainsPiiEntities(ContainsPiiEntitiesRequest) -> ContainsPiiEntitiesResponse {
        required: [text, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, InternalServer],
    }

    /// Classify a document with a custom classifier endpoint.
    classify_document => ClassifyDocument(ClassifyDocumentRequest) -> ClassifyDocumentResponse {
        required: [endpoint_arn],
        idempotent: true,
        errors: [InvalidRequest, ResourceUnavailable, TextSizeLimitExceeded, InternalServer],
    }

    // Batch detection

    /// Detect the dominant language of up to 25 documents.
    batch_detect_dominant_language => BatchDetectDominantLanguage(BatchDetectDominantLanguageRequest) -> BatchDetectDominantLanguageResponse {
        required: [text_list],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, BatchSizeLimitExceeded, InternalServer],
    }

    /// Detect entities in up to 25 documents.
    batch_detect_entities => BatchDetectEntities(BatchDetectEntitiesRequest) -> BatchDetectEntitiesResponse {
        required: [text_list, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, BatchSizeLimitExceeded, InternalServer],
    }

    /// Detect key phrases in up to 25 documents.
    batch_detect_key_phrases => BatchDetectKeyPhrases(BatchDetectKeyPhrasesRequest) -> BatchDetectKeyPhrasesResponse {
        required: [text_list, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, BatchSizeLimitExceeded, InternalServer],
    }

    /// Detect the sentiment of up to 25 documents.
    batch_detect_sentiment => BatchDetectSentiment(BatchDetectSentimentRequest) -> BatchDetectSentimentResponse {
        required: [text_list, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, BatchSizeLimitExceeded, InternalServer],
    }

    /// Analyze the syntax of up to 25 documents.
    batch_detect_syntax => BatchDetectSyntax(BatchDetectSyntaxRequest) -> BatchDetectSyntaxResponse {
        required: [text_list, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, BatchSizeLimitExceeded, InternalServer],
    }

    /// Detect targeted sentiment in up to 25 documents.
    batch_detect_targeted_sentiment => BatchDetectTargetedSentiment(BatchDetectTargetedSentimentRequest) -> BatchDetectTargetedSentimentResponse {
        required: [text_list, language_code],
        idempotent: true,
        errors: [InvalidRequest, TextSizeLimitExceeded, UnsupportedLanguage, BatchSizeLimitExceeded, InternalServer],
    }

    // Document classifiers

    /// Train a new custom document classifier.
    create_document_classifier => CreateDocumentClassifier(CreateDocumentClassifierRequest) -> CreateDocumentClassifierResponse {
        required: [document_classifier_name, data_access_role_arn, input_data_config, language_code],
        idempotent: false,
        errors: [InvalidRequest, ResourceInUse, TooManyTags, TooManyRequests, ResourceLimitExceeded, UnsupportedLanguage, KmsKeyValidation, InternalServer],
    }

    /// Describe a document classifier version.
    describe_document_classifier => DescribeDocumentClassifier(DescribeDocumentClassifierRequest) -> DescribeDocumentClassifierResponse {
        required: [document_classifier_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// List document classifiers.
    list_document_classifiers => ListDocumentClassifiers(ListDocumentClassifiersRequest) -> ListDocumentClassifiersResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Delete a document classifier version.
    delete_document_classifier => DeleteDocumentClassifier(DeleteDocumentClassifierRequest) -> DeleteDocumentClassifierResponse {
        required: [document_classifier_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, ResourceUnavailable, ResourceInUse, InternalServer],
    }

    /// Stop training a document classifier.
    stop_training_document_classifier => StopTrainingDocumentClassifier(StopTrainingDocumentClassifierRequest) -> StopTrainingDocumentClassifierResponse {
        required: [document_classifier_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    // Entity recognizers

    /// Train a new custom entity recognizer.
    create_entity_recognizer => CreateEntityRecognizer(CreateEntityRecognizerRequest) -> CreateEntityRecognizerResponse {
        required: [recognizer_name, data_access_role_arn, input_data_config, language_code],
        idempotent: false,
        errors: [InvalidRequest, ResourceInUse, TooManyTags, TooManyRequests, ResourceLimitExceeded, UnsupportedLanguage, KmsKeyValidation, InternalServer],
    }

    /// Describe an entity recognizer version.
    describe_entity_recognizer => DescribeEntityRecognizer(DescribeEntityRecognizerRequest) -> DescribeEntityRecognizerResponse {
        required: [entity_recognizer_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// List entity recognizers.
    list_entity_recognizers => ListEntityRecognizers(ListEntityRecognizersRequest) -> ListEntityRecognizersResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Delete an entity recognizer version.
    delete_entity_recognizer => DeleteEntityRecognizer(DeleteEntityRecognizerRequest) -> DeleteEntityRecognizerResponse {
        required: [entity_recognizer_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, ResourceUnavailable, ResourceInUse, InternalServer],
    }

    /// Stop training an entity recognizer.
    stop_training_entity_recognizer => StopTrainingEntityRecognizer(StopTrainingEntityRecognizerRequest) -> StopTrainingEntityRecognizerResponse {
        required: [entity_recognizer_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    // Endpoints

    /// Provision a real-time endpoint for a custom model.
    create_endpoint => CreateEndpoint(CreateEndpointRequest) -> CreateEndpointResponse {
        required: [endpoint_name, desired_inference_units],
        idempotent: false,
        errors: [InvalidRequest, ResourceInUse, ResourceLimitExceeded, ResourceNotFound, ResourceUnavailable, TooManyRequests, TooManyTags, InternalServer],
    }

    /// Describe an endpoint.
    describe_endpoint => DescribeEndpoint(DescribeEndpointRequest) -> DescribeEndpointResponse {
        required: [endpoint_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// List endpoints.
    list_endpoints => ListEndpoints(ListEndpointsRequest) -> ListEndpointsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InternalServer],
    }

    /// Change the model or capacity of an endpoint.
    update_endpoint => UpdateEndpoint(UpdateEndpointRequest) -> UpdateEndpointResponse {
        required: [endpoint_arn],
        idempotent: true,
        errors: [InvalidRequest, ResourceInUse, ResourceLimitExceeded, ResourceNotFound, ResourceUnavailable, TooManyRequests, InternalServer],
    }

    /// Delete an endpoint.
    delete_endpoint => DeleteEndpoint(DeleteEndpointRequest) -> DeleteEndpointResponse {
        required: [endpoint_arn],
        idempotent: true,
        errors: [InvalidRequest, ResourceInUse, ResourceNotFound, TooManyRequests, InternalServer],
    }

    // Flywheels

    /// Create a flywheel that retrains a custom model.
    create_flywheel => CreateFlywheel(CreateFlywheelRequest) -> CreateFlywheelResponse {
        required: [flywheel_name, data_access_role_arn, data_lake_s3_uri],
        idempotent: false,
        errors: [InvalidRequest, ResourceInUse, TooManyTags, TooManyRequests, ResourceLimitExceeded, UnsupportedLanguage, KmsKeyValidation, ResourceNotFound, ResourceUnavailable, InternalServer],
    }

    /// Describe a flywheel.
    describe_flywheel => DescribeFlywheel(DescribeFlywheelRequest) -> DescribeFlywheelResponse {
        required: [flywheel_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// List flywheels.
    list_flywheels => ListFlywheels(ListFlywheelsRequest) -> ListFlywheelsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, InvalidFilter, TooManyRequests, InternalServer],
    }

    /// Change the active model or settings of a flywheel.
    update_flywheel => UpdateFlywheel(UpdateFlywheelRequest) -> UpdateFlywheelResponse {
        required: [flywheel_arn],
        idempotent: true,
        errors: [InvalidRequest, KmsKeyValidation, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// Delete a flywheel.
    delete_flywheel => DeleteFlywheel(DeleteFlywheelRequest) -> DeleteFlywheelResponse {
        required: [flywheel_arn],
        idempotent: true,
        errors: [InvalidRequest, ResourceInUse, ResourceNotFound, TooManyRequests, InternalServer],
    }

    /// Start training a new model version from the flywheel's data lake.
    start_flywheel_iteration => StartFlywheelIteration(StartFlywheelIterationRequest) -> StartFlywheelIterationResponse {
        required: [flywheel_arn],
        idempotent: false,
        errors: [InvalidRequest, ResourceInUse, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// Describe one flywheel iteration.
    describe_flywheel_iteration => DescribeFlywheelIteration(DescribeFlywheelIterationRequest) -> DescribeFlywheelIterationResponse {
        required: [flywheel_arn, flywheel_iteration_id],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// List the iterations of a flywheel.
    list_flywheel_iteration_history => ListFlywheelIterationHistory(ListFlywheelIterationHistoryRequest) -> ListFlywheelIterationHistoryResponse {
        required: [flywheel_arn],
        idempotent: true,
        errors: [InvalidRequest, InvalidFilter, TooManyRequests, ResourceNotFound, InternalServer],
    }

    // Datasets

    /// Add a dataset to a flywheel's data lake.
    create_dataset => CreateDataset(CreateDatasetRequest) -> CreateDatasetResponse {
        required: [flywheel_arn, dataset_name, input_data_config],
        idempotent: false,
        errors: [InvalidRequest, ResourceInUse, TooManyTags, TooManyRequests, ResourceLimitExceeded, ResourceNotFound, InternalServer],
    }

    /// Describe a dataset.
    describe_dataset => DescribeDataset(DescribeDatasetRequest) -> DescribeDatasetResponse {
        required: [dataset_arn],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, InternalServer],
    }

    /// List the datasets of a flywheel.
    list_datasets => ListDatasets(ListDatasetsRequest) -> ListDatasetsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, ResourceNotFound, InternalServer],
    }

    // Document classification jobs

    /// Start classifying documents with a custom classifier.
    start_document_classification_job => StartDocumentClassificationJob(StartDocumentClassificationJobRequest) -> StartDocumentClassificationJobResponse {
        required: [input_data_config, output_data_config, data_access_role_arn],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, ResourceUnavailable, KmsKeyValidation, TooManyTags, ResourceInUse, ResourceNotFound, InternalServer],
    }

    /// Describe a document classification job.
    describe_document_classification_job => DescribeDocumentClassificationJob(DescribeDocumentClassificationJobRequest) -> DescribeDocumentClassificationJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, JobNotFound, InternalServer],
    }

    /// List document classification jobs.
    list_document_classification_jobs => ListDocumentClassificationJobs(ListDocumentClassificationJobsRequest) -> ListDocumentClassificationJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    // Dominant language jobs

    /// Start detecting the dominant language of a document collection.
    start_dominant_language_detection_job => StartDominantLanguageDetectionJob(StartDominantLanguageDetectionJobRequest) -> StartDominantLanguageDetectionJobResponse {
        required: [input_data_config, output_data_config, data_access_role_arn],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, KmsKeyValidation, TooManyTags, ResourceInUse, InternalServer],
    }

    /// Describe a dominant language detection job.
    describe_dominant_language_detection_job => DescribeDominantLanguageDetectionJob(DescribeDominantLanguageDetectionJobRequest) -> DescribeDominantLanguageDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, TooManyRequests, InternalServer],
    }

    /// List dominant language detection jobs.
    list_dominant_language_detection_jobs => ListDominantLanguageDetectionJobs(ListDominantLanguageDetectionJobsRequest) -> ListDominantLanguageDetectionJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Stop a dominant language detection job.
    stop_dominant_language_detection_job => StopDominantLanguageDetectionJob(StopDominantLanguageDetectionJobRequest) -> StopDominantLanguageDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, InternalServer],
    }

    // Entities jobs

    /// Start detecting entities in a document collection.
    start_entities_detection_job => StartEntitiesDetectionJob(StartEntitiesDetectionJobRequest) -> StartEntitiesDetectionJobResponse {
        required: [input_data_config, output_data_config, data_access_role_arn, language_code],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, ResourceNotFound, ResourceUnavailable, KmsKeyValidation, TooManyTags, ResourceInUse, InternalServer],
    }

    /// Describe an entities detection job.
    describe_entities_detection_job => DescribeEntitiesDetectionJob(DescribeEntitiesDetectionJobRequest) -> DescribeEntitiesDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, TooManyRequests, InternalServer],
    }

    /// List entities detection jobs.
    list_entities_detection_jobs => ListEntitiesDetectionJobs(ListEntitiesDetectionJobsRequest) -> ListEntitiesDetectionJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Stop an entities detection job.
    stop_entities_detection_job => StopEntitiesDetectionJob(StopEntitiesDetectionJobRequest) -> StopEntitiesDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, InternalServer],
    }

    // Key phrases jobs

    /// Start detecting key phrases in a document collection.
    start_key_phrases_detection_job => StartKeyPhrasesDetectionJob(StartKeyPhrasesDetectionJobRequest) -> StartKeyPhrasesDetectionJobResponse {
        required: [input_data_config, output_data_config, data_access_role_arn, language_code],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, KmsKeyValidation, TooManyTags, ResourceInUse, InternalServer],
    }

    /// Describe a key phrases detection job.
    describe_key_phrases_detection_job => DescribeKeyPhrasesDetectionJob(DescribeKeyPhrasesDetectionJobRequest) -> DescribeKeyPhrasesDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, TooManyRequests, InternalServer],
    }

    /// List key phrases detection jobs.
    list_key_phrases_detection_jobs => ListKeyPhrasesDetectionJobs(ListKeyPhrasesDetectionJobsRequest) -> ListKeyPhrasesDetectionJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Stop a key phrases detection job.
    stop_key_phrases_detection_job => StopKeyPhrasesDetectionJob(StopKeyPhrasesDetectionJobRequest) -> StopKeyPhrasesDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, InternalServer],
    }

    // Sentiment jobs

    /// Start detecting sentiment in a document collection.
    start_sentiment_detection_job => StartSentimentDetectionJob(StartSentimentDetectionJobRequest) -> StartSentimentDetectionJobResponse {
        required: [input_data_config, output_data_config, data_access_role_arn, language_code],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, KmsKeyValidation, TooManyTags, ResourceInUse, InternalServer],
    }

    /// Describe a sentiment detection job.
    describe_sentiment_detection_job => DescribeSentimentDetectionJob(DescribeSentimentDetectionJobRequest) -> DescribeSentimentDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, TooManyRequests, InternalServer],
    }

    /// List sentiment detection jobs.
    list_sentiment_detection_jobs => ListSentimentDetectionJobs(ListSentimentDetectionJobsRequest) -> ListSentimentDetectionJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Stop a sentiment detection job.
    stop_sentiment_detection_job => StopSentimentDetectionJob(StopSentimentDetectionJobRequest) -> StopSentimentDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, InternalServer],
    }

    // Targeted sentiment jobs

    /// Start detecting targeted sentiment in a document collection.
    start_targeted_sentiment_detection_job => StartTargetedSentimentDetectionJob(StartTargetedSentimentDetectionJobRequest) -> StartTargetedSentimentDetectionJobResponse {
        required: [input_data_config, output_data_config, data_access_role_arn, language_code],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, KmsKeyValidation, TooManyTags, ResourceInUse, InternalServer],
    }

    /// Describe a targeted sentiment detection job.
    describe_targeted_sentiment_detection_job => DescribeTargetedSentimentDetectionJob(DescribeTargetedSentimentDetectionJobRequest) -> DescribeTargetedSentimentDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, TooManyRequests, InternalServer],
    }

    /// List targeted sentiment detection jobs.
    list_targeted_sentiment_detection_jobs => ListTargetedSentimentDetectionJobs(ListTargetedSentimentDetectionJobsRequest) -> ListTargetedSentimentDetectionJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Stop a targeted sentiment detection job.
    stop_targeted_sentiment_detection_job => StopTargetedSentimentDetectionJob(StopTargetedSentimentDetectionJobRequest) -> StopTargetedSentimentDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, InternalServer],
    }

    // PII jobs

    /// Start detecting or redacting PII in a document collection.
    start_pii_entities_detection_job => StartPiiEntitiesDetectionJob(StartPiiEntitiesDetectionJobRequest) -> StartPiiEntitiesDetectionJobResponse {
        required: [input_data_config, output_data_config, mode, data_access_role_arn, language_code],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, KmsKeyValidation, TooManyTags, ResourceInUse, InternalServer],
    }

    /// Describe a PII entities detection job.
    describe_pii_entities_detection_job => DescribePiiEntitiesDetectionJob(DescribePiiEntitiesDetectionJobRequest) -> DescribePiiEntitiesDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, TooManyRequests, InternalServer],
    }

    /// List PII entities detection jobs.
    list_pii_entities_detection_jobs => ListPiiEntitiesDetectionJobs(ListPiiEntitiesDetectionJobsRequest) -> ListPiiEntitiesDetectionJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    /// Stop a PII entities detection job.
    stop_pii_entities_detection_job => StopPiiEntitiesDetectionJob(StopPiiEntitiesDetectionJobRequest) -> StopPiiEntitiesDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, InternalServer],
    }

    // Topic modeling jobs

    /// Start topic modeling over a document collection.
    start_topics_detection_job => StartTopicsDetectionJob(StartTopicsDetectionJobRequest) -> StartTopicsDetectionJobResponse {
        required: [input_data_config, output_data_config, data_access_role_arn],
        idempotent: false,
        errors: [InvalidRequest, TooManyRequests, KmsKeyValidation, TooManyTags, ResourceInUse, InternalServer],
    }

    /// Describe a topic modeling job.
    describe_topics_detection_job => DescribeTopicsDetectionJob(DescribeTopicsDetectionJobRequest) -> DescribeTopicsDetectionJobResponse {
        required: [job_id],
        idempotent: true,
        errors: [InvalidRequest, JobNotFound, TooManyRequests, InternalServer],
    }

    /// List topic modeling jobs.
    list_topics_detection_jobs => ListTopicsDetectionJobs(ListTopicsDetectionJobsRequest) -> ListTopicsDetectionJobsResponse {
        required: [],
        idempotent: true,
        errors: [InvalidRequest, TooManyRequests, InvalidFilter, InternalServer],
    }

    // Tagging

    /// Add tags to a resource.
    tag_resource => TagResource(TagResourceRequest) -> TagResourceResponse {
        required: [resource_arn, tags],
        idempotent: true,
        errors: [InvalidRequest, ConcurrentModification, ResourceNotFound, TooManyTags, InternalServer],
    }

    /// Remove tags from a resource.
    untag_resource => UntagResource(UntagResourceRequest) -> UntagResourceResponse {
        required: [resource_arn, tag_keys],
        idempotent: true,
        errors: [TooManyTagKeys, InvalidRequest, ConcurrentModification, ResourceNotFound, InternalServer],
    }

    /// List the tags on a resource.
    list_tags_for_resource => ListTagsForResource(ListTagsForResourceRequest) -> ListTagsForResourceResponse {
        required: [resource_arn],
        idempotent: true,
        errors: [InvalidRequest, ResourceNotFound, InternalServer],
    }

    // Resource policies

    /// Attach a resource policy to a custom model.
    put_resource_policy => PutResourcePolicy(PutResourcePolicyRequest) -> PutResourcePolicyResponse {
        required: [resource_arn, resource_policy],
        idempotent: true,
        errors: [InvalidRequest, ResourceNotFound, InternalServer],
    }

    /// Read the resource policy of a custom model.
    describe_resource_policy => DescribeResourcePolicy(DescribeResourcePolicyRequest) -> DescribeResourcePolicyResponse {
        required: [resource_arn],
        idempotent: true,
        errors: [InvalidRequest, ResourceNotFound, InternalServer],
    }

    /// Remove the resource policy of a custom model.
    delete_resource_policy => DeleteResourcePolicy(DeleteResourcePolicyRequest) -> DeleteResourcePolicyResponse {
        required: [resource_arn],
        idempotent: true,
        errors: [InvalidRequest, ResourceNotFound, InternalServer],
    }

    // Model import

    /// Copy a custom model shared from another account.
    import_model => ImportModel(ImportModelRequest) -> ImportModelResponse {
        required: [source_model_arn],
        idempotent: false,
        errors: [InvalidRequest, ResourceNotFound, ResourceInUse, ResourceUnavailable, ResourceLimitExceeded, TooManyRequests, TooManyTags, KmsKeyValidation, InternalServer],
    }
}

/// Look up a catalog entry by wire name.
pub fn find(name: &str) -> Option<&'static OperationInfo> {
    CATALOG.iter().find(|info| info.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(CATALOG.len(), 78);

        let names: HashSet<_> = CATALOG.iter().map(|info| info.name).collect();
        assert_eq!(names.len(), CATALOG.len(), "duplicate operation names");
    }

    #[test]
    fn test_every_operation_documents_internal_errors() {
        for info in CATALOG {
            assert!(
                info.errors.contains(&ServiceErrorKind::InternalServer),
                "{} lacks InternalServerException",
                info.name
            );
        }
    }

    #[test]
    fn test_only_work_creating_calls_are_non_idempotent() {
        for info in CATALOG {
            let creates_work = info.name.starts_with("Start")
                || info.name.starts_with("Create")
                || info.name == "ImportModel";
            assert_eq!(info.idempotent, !creates_work, "{}", info.name);
        }
    }

    #[test]
    fn test_associated_constants() {
        assert_eq!(DetectSentimentRequest::NAME, "DetectSentiment");
        assert!(DetectSentimentRequest::IDEMPOTENT);
        assert!(!StartEntitiesDetectionJobRequest::IDEMPOTENT);
        assert!(StopSentimentDetectionJobRequest::ERRORS.contains(&ServiceErrorKind::JobNotFound));
    }

    #[test]
    fn test_missing_required_member() {
        let request = DetectSentimentRequest::builder().text("hello").build().unwrap();

        assert_matches!(
            request.validate(),
            Err(Error::MissingParameter {
                operation: "DetectSentiment",
                field: "language_code"
            })
        );
    }

    #[test]
    fn test_required_members_present() {
        let request = DescribeFlywheelIterationRequest::builder()
            .flywheel_arn("arn:aws:comprehend:us-east-1:111122223333:flywheel/fw")
            .flywheel_iteration_id("20231114T221320Z")
            .build()
            .unwrap();

        assert!(request.validate().is_ok());
        assert!(ListFlywheelsRequest::default().validate().is_ok());
    }

    #[test]
    fn test_find() {
        let info = find("ImportModel").unwrap();
        assert_eq!(info.method, "import_model");
        assert_eq!(info.required, &["source_model_arn"]);
        assert!(find("DetectMood").is_none());
    }
}
