//! Datasets in a flywheel's data lake

use super::{
    AugmentedManifestsListItem, DocumentReaderConfig, InputFormat, Tag, Timestamp,
    TrainingDataFormat,
};

string_enum! {
    /// Whether a dataset is used for training or testing.
    pub enum DatasetType {
        /// Training data
        Train = "TRAIN",
        /// Test data
        Test = "TEST",
    }
}

string_enum! {
    /// State of a dataset.
    pub enum DatasetStatus {
        /// Being ingested
        Creating = "CREATING",
        /// Ready
        Completed = "COMPLETED",
        /// Ingestion failed
        Failed = "FAILED",
    }
}

shape! {
    /// CSV input of a classifier dataset.
    pub struct DatasetDocumentClassifierInputDataConfig => DatasetDocumentClassifierInputDataConfigBuilder {
        /// S3 location of the CSV
        s3_uri: String,
        /// Separator between labels in multi-label mode
        label_delimiter: String,
    }
}

shape! {
    /// Documents of a recognizer dataset.
    pub struct DatasetEntityRecognizerDocuments => DatasetEntityRecognizerDocumentsBuilder {
        /// S3 location of the documents
        s3_uri: String,
        /// Layout of the document files
        input_format: InputFormat,
    }
}

shape! {
    /// S3 location of one file-based input.
    pub struct DatasetS3Location => DatasetS3LocationBuilder {
        /// S3 location
        s3_uri: String,
    }
}

shape! {
    /// Input of a recognizer dataset.
    pub struct DatasetEntityRecognizerInputDataConfig => DatasetEntityRecognizerInputDataConfigBuilder {
        /// Annotation files
        annotations: DatasetS3Location,
        /// Documents
        documents: DatasetEntityRecognizerDocuments,
        /// Entity list
        entity_list: DatasetS3Location,
    }
}

shape! {
    /// Where a dataset's data comes from.
    pub struct DatasetInputDataConfig => DatasetInputDataConfigBuilder {
        /// Augmented manifests
        augmented_manifests: Vec<AugmentedManifestsListItem>,
        /// Layout of the data
        data_format: TrainingDataFormat,
        /// Classifier input
        document_classifier_input_data_config: DatasetDocumentClassifierInputDataConfig,
        /// Recognizer input
        entity_recognizer_input_data_config: DatasetEntityRecognizerInputDataConfig,
        /// Extraction settings for image and PDF input
        document_reader_config: DocumentReaderConfig,
    }
}

shape! {
    /// Everything known about a dataset.
    pub struct DatasetProperties => DatasetPropertiesBuilder {
        /// Dataset ARN
        dataset_arn: String,
        /// Dataset name
        dataset_name: String,
        /// Training or test
        dataset_type: DatasetType,
        /// S3 location inside the data lake
        dataset_s3_uri: String,
        /// Description
        description: String,
        /// State
        status: DatasetStatus,
        /// Failure detail
        message: String,
        /// Number of documents
        number_of_documents: i64,
        /// When the dataset was created
        creation_time: Timestamp,
        /// When ingestion finished
        end_time: Timestamp,
    }
}

shape! {
    /// Filter for `ListDatasets`.
    pub struct DatasetFilter => DatasetFilterBuilder {
        /// Only datasets in this state
        status: DatasetStatus,
        /// Only datasets of this type
        dataset_type: DatasetType,
        /// Only datasets created after this time
        creation_time_after: Timestamp,
        /// Only datasets created before this time
        creation_time_before: Timestamp,
    }
}

shape! {
    /// Request of `CreateDataset`.
    pub struct CreateDatasetRequest => CreateDatasetRequestBuilder {
        /// Flywheel that owns the dataset
        flywheel_arn: String,
        /// Dataset name
        dataset_name: String,
        /// Training or test
        dataset_type: DatasetType,
        /// Description
        description: String,
        /// Where the data comes from
        input_data_config: DatasetInputDataConfig,
        /// Idempotency token chosen by the caller
        client_request_token: String,
        /// Tags for the dataset
        tags: Vec<Tag>,
    }
}

shape! {
    /// Response of `CreateDataset`.
    pub struct CreateDatasetResponse => CreateDatasetResponseBuilder {
        /// ARN of the new dataset
        dataset_arn: String,
    }
}

shape! {
    /// Request of `DescribeDataset`.
    pub struct DescribeDatasetRequest => DescribeDatasetRequestBuilder {
        /// Dataset ARN
        dataset_arn: String,
    }
}

shape! {
    /// Response of `DescribeDataset`.
    pub struct DescribeDatasetResponse => DescribeDatasetResponseBuilder {
        /// Dataset properties
        dataset_properties: DatasetProperties,
    }
}

shape! {
    /// Request of `ListDatasets`.
    pub struct ListDatasetsRequest => ListDatasetsRequestBuilder {
        /// Flywheel that owns the datasets
        flywheel_arn: String,
        /// Filter
        filter: DatasetFilter,
        /// Token from the previous page
        next_token: String,
        /// Page size
        max_results: i32,
    }
}

shape! {
    /// Response of `ListDatasets`.
    pub struct ListDatasetsResponse => ListDatasetsResponseBuilder {
        /// Datasets on this page
        dataset_properties_list: Vec<DatasetProperties>,
        /// Token for the next page
        next_token: String,
    }
}

paginated!(
    ListDatasetsRequest => ListDatasetsResponse,
    dataset_properties_list: DatasetProperties
);
