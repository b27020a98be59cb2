//! Real-time analysis of up to 25 documents per call
//!
//! A batch call succeeds as a whole even when some documents fail; the failed
//! ones are listed in `error_list` by their index in the request.

use super::{
    BatchItemError, DominantLanguage, Entity, KeyPhrase, LanguageCode, SentimentScore,
    SentimentType, SyntaxLanguageCode, SyntaxToken, TargetedSentimentEntity,
};

/// Responses of batch operations.
pub trait BatchResponse {
    /// Per-document failures.
    fn errors(&self) -> &[BatchItemError];

    /// Number of documents that succeeded.
    fn success_count(&self) -> usize;

    /// Whether any document failed.
    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Failure for the document at `index` of the request, if it failed.
    fn error_for(&self, index: i32) -> Option<&BatchItemError> {
        self.errors().iter().find(|err| err.index == Some(index))
    }
}

macro_rules! batch_response {
    ($($response:ty),* $(,)?) => {
        $(
            impl BatchResponse for $response {
                fn errors(&self) -> &[BatchItemError] {
                    self.error_list.as_deref().unwrap_or_default()
                }

                fn success_count(&self) -> usize {
                    self.result_list.as_ref().map_or(0, Vec::len)
                }
            }
        )*
    };
}

shape! {
    /// Request of `BatchDetectDominantLanguage`.
    pub struct BatchDetectDominantLanguageRequest => BatchDetectDominantLanguageRequestBuilder {
        /// Up to 25 documents
        text_list: Vec<String>,
    }
}

shape! {
    /// Result for one document of `BatchDetectDominantLanguage`.
    pub struct BatchDetectDominantLanguageItemResult => BatchDetectDominantLanguageItemResultBuilder {
        /// Index of the document in the request
        index: i32,
        /// Detected languages
        languages: Vec<DominantLanguage>,
    }
}

shape! {
    /// Response of `BatchDetectDominantLanguage`.
    pub struct BatchDetectDominantLanguageResponse => BatchDetectDominantLanguageResponseBuilder {
        /// Successful results
        result_list: Vec<BatchDetectDominantLanguageItemResult>,
        /// Failed documents
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    /// Request of `BatchDetectEntities`.
    pub struct BatchDetectEntitiesRequest => BatchDetectEntitiesRequestBuilder {
        /// Up to 25 documents
        text_list: Vec<String>,
        /// Language of every document
        language_code: LanguageCode,
    }
}

shape! {
    /// Result for one document of `BatchDetectEntities`.
    pub struct BatchDetectEntitiesItemResult => BatchDetectEntitiesItemResultBuilder {
        /// Index of the document in the request
        index: i32,
        /// Detected entities
        entities: Vec<Entity>,
    }
}

shape! {
    /// Response of `BatchDetectEntities`.
    pub struct BatchDetectEntitiesResponse => BatchDetectEntitiesResponseBuilder {
        /// Successful results
        result_list: Vec<BatchDetectEntitiesItemResult>,
        /// Failed documents
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    /// Request of `BatchDetectKeyPhrases`.
    pub struct BatchDetectKeyPhrasesRequest => BatchDetectKeyPhrasesRequestBuilder {
        /// Up to 25 documents
        text_list: Vec<String>,
        /// Language of every document
        language_code: LanguageCode,
    }
}

shape! {
    /// Result for one document of `BatchDetectKeyPhrases`.
    pub struct BatchDetectKeyPhrasesItemResult => BatchDetectKeyPhrasesItemResultBuilder {
        /// Index of the document in the request
        index: i32,
        /// Detected phrases
        key_phrases: Vec<KeyPhrase>,
    }
}

shape! {
    /// Response of `BatchDetectKeyPhrases`.
    pub struct BatchDetectKeyPhrasesResponse => BatchDetectKeyPhrasesResponseBuilder {
        /// Successful results
        result_list: Vec<BatchDetectKeyPhrasesItemResult>,
        /// Failed documents
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    /// Request of `BatchDetectSentiment`.
    pub struct BatchDetectSentimentRequest => BatchDetectSentimentRequestBuilder {
        /// Up to 25 documents
        text_list: Vec<String>,
        /// Language of every document
        language_code: LanguageCode,
    }
}

shape! {
    /// Result for one document of `BatchDetectSentiment`.
    pub struct BatchDetectSentimentItemResult => BatchDetectSentimentItemResultBuilder {
        /// Index of the document in the request
        index: i32,
        /// Prevailing sentiment
        sentiment: SentimentType,
        /// Confidence of each sentiment
        sentiment_score: SentimentScore,
    }
}

shape! {
    /// Response of `BatchDetectSentiment`.
    pub struct BatchDetectSentimentResponse => BatchDetectSentimentResponseBuilder {
        /// Successful results
        result_list: Vec<BatchDetectSentimentItemResult>,
        /// Failed documents
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    /// Request of `BatchDetectSyntax`.
    pub struct BatchDetectSyntaxRequest => BatchDetectSyntaxRequestBuilder {
        /// Up to 25 documents
        text_list: Vec<String>,
        /// Language of every document
        language_code: SyntaxLanguageCode,
    }
}

shape! {
    /// Result for one document of `BatchDetectSyntax`.
    pub struct BatchDetectSyntaxItemResult => BatchDetectSyntaxItemResultBuilder {
        /// Index of the document in the request
        index: i32,
        /// Tokens in text order
        syntax_tokens: Vec<SyntaxToken>,
    }
}

shape! {
    /// Response of `BatchDetectSyntax`.
    pub struct BatchDetectSyntaxResponse => BatchDetectSyntaxResponseBuilder {
        /// Successful results
        result_list: Vec<BatchDetectSyntaxItemResult>,
        /// Failed documents
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    /// Request of `BatchDetectTargetedSentiment`.
    pub struct BatchDetectTargetedSentimentRequest => BatchDetectTargetedSentimentRequestBuilder {
        /// Up to 25 documents
        text_list: Vec<String>,
        /// Language of every document
        language_code: LanguageCode,
    }
}

shape! {
    /// Result for one document of `BatchDetectTargetedSentiment`.
    pub struct BatchDetectTargetedSentimentItemResult => BatchDetectTargetedSentimentItemResultBuilder {
        /// Index of the document in the request
        index: i32,
        /// Entities with the sentiment towards each mention
        entities: Vec<TargetedSentimentEntity>,
    }
}

shape! {
    /// Response of `BatchDetectTargetedSentiment`.
    pub struct BatchDetectTargetedSentimentResponse => BatchDetectTargetedSentimentResponseBuilder {
        /// Successful results
        result_list: Vec<BatchDetectTargetedSentimentItemResult>,
        /// Failed documents
        error_list: Vec<BatchItemError>,
    }
}

batch_response!(
    BatchDetectDominantLanguageResponse,
    BatchDetectEntitiesResponse,
    BatchDetectKeyPhrasesResponse,
    BatchDetectSentimentResponse,
    BatchDetectSyntaxResponse,
    BatchDetectTargetedSentimentResponse,
);
