//! Amazon CloudSearch configuration commands.
use aws_config::SdkConfig;
use aws_sdk_cloudsearch::types as aws;

use super::{display, records, text, Member};
use crate::{
    group::{group, OptionGroup},
    Cmdlet,
};

/// Declares a per-type option block of an index field.
///
/// Each member is bound from its own flag, and converted to and from the
/// SDK type of the same name.
macro_rules! options {
    ($(#[$meta:meta])* $name:ident, $heading:literal {
        $($field:ident / $setter:ident ($flag:literal): $ty:ty),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, clap::Args, serde::Serialize, OptionGroup)]
        #[command(next_help_heading = $heading)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                #[arg(id = $flag, long = $flag)]
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl From<&$name> for aws::$name {
            fn from(value: &$name) -> Self {
                aws::$name::builder()
                    $(.$setter(value.$field.clone()))*
                    .build()
            }
        }

        impl From<&aws::$name> for $name {
            fn from(value: &aws::$name) -> Self {
                $name {
                    $($field: value.$field.clone(),)*
                }
            }
        }
    };
}

options! {
    /// Options for a 64-bit signed integer field.
    IntOptions, "Int options" {
        default_value / set_default_value ("int-default-value"): i64,
        source_field / set_source_field ("int-source-field"): String,
        facet_enabled / set_facet_enabled ("int-facet-enabled"): bool,
        search_enabled / set_search_enabled ("int-search-enabled"): bool,
        return_enabled / set_return_enabled ("int-return-enabled"): bool,
        sort_enabled / set_sort_enabled ("int-sort-enabled"): bool,
    }
}

options! {
    /// Options for a double-precision 64-bit floating point field.
    DoubleOptions, "Double options" {
        default_value / set_default_value ("double-default-value"): f64,
        source_field / set_source_field ("double-source-field"): String,
        facet_enabled / set_facet_enabled ("double-facet-enabled"): bool,
        search_enabled / set_search_enabled ("double-search-enabled"): bool,
        return_enabled / set_return_enabled ("double-return-enabled"): bool,
        sort_enabled / set_sort_enabled ("double-sort-enabled"): bool,
    }
}

options! {
    /// Options for a literal field.
    LiteralOptions, "Literal options" {
        default_value / set_default_value ("literal-default-value"): String,
        source_field / set_source_field ("literal-source-field"): String,
        facet_enabled / set_facet_enabled ("literal-facet-enabled"): bool,
        search_enabled / set_search_enabled ("literal-search-enabled"): bool,
        return_enabled / set_return_enabled ("literal-return-enabled"): bool,
        sort_enabled / set_sort_enabled ("literal-sort-enabled"): bool,
    }
}

options! {
    /// Options for a text field.
    TextOptions, "Text options" {
        default_value / set_default_value ("text-default-value"): String,
        source_field / set_source_field ("text-source-field"): String,
        return_enabled / set_return_enabled ("text-return-enabled"): bool,
        sort_enabled / set_sort_enabled ("text-sort-enabled"): bool,
        highlight_enabled / set_highlight_enabled ("text-highlight-enabled"): bool,
        analysis_scheme / set_analysis_scheme ("text-analysis-scheme"): String,
    }
}

options! {
    /// Options for a date field, in IETF RFC3339 format.
    DateOptions, "Date options" {
        default_value / set_default_value ("date-default-value"): String,
        source_field / set_source_field ("date-source-field"): String,
        facet_enabled / set_facet_enabled ("date-facet-enabled"): bool,
        search_enabled / set_search_enabled ("date-search-enabled"): bool,
        return_enabled / set_return_enabled ("date-return-enabled"): bool,
        sort_enabled / set_sort_enabled ("date-sort-enabled"): bool,
    }
}

options! {
    /// Options for a latlon field, a location stored as `lat,lon`.
    LatLonOptions, "LatLon options" {
        default_value / set_default_value ("latlon-default-value"): String,
        source_field / set_source_field ("latlon-source-field"): String,
        facet_enabled / set_facet_enabled ("latlon-facet-enabled"): bool,
        search_enabled / set_search_enabled ("latlon-search-enabled"): bool,
        return_enabled / set_return_enabled ("latlon-return-enabled"): bool,
        sort_enabled / set_sort_enabled ("latlon-sort-enabled"): bool,
    }
}

options! {
    IntArrayOptions, "Int array options" {
        default_value / set_default_value ("int-array-default-value"): i64,
        source_fields / set_source_fields ("int-array-source-fields"): String,
        facet_enabled / set_facet_enabled ("int-array-facet-enabled"): bool,
        search_enabled / set_search_enabled ("int-array-search-enabled"): bool,
        return_enabled / set_return_enabled ("int-array-return-enabled"): bool,
    }
}

options! {
    DoubleArrayOptions, "Double array options" {
        default_value / set_default_value ("double-array-default-value"): f64,
        source_fields / set_source_fields ("double-array-source-fields"): String,
        facet_enabled / set_facet_enabled ("double-array-facet-enabled"): bool,
        search_enabled / set_search_enabled ("double-array-search-enabled"): bool,
        return_enabled / set_return_enabled ("double-array-return-enabled"): bool,
    }
}

options! {
    LiteralArrayOptions, "Literal array options" {
        default_value / set_default_value ("literal-array-default-value"): String,
        source_fields / set_source_fields ("literal-array-source-fields"): String,
        facet_enabled / set_facet_enabled ("literal-array-facet-enabled"): bool,
        search_enabled / set_search_enabled ("literal-array-search-enabled"): bool,
        return_enabled / set_return_enabled ("literal-array-return-enabled"): bool,
    }
}

options! {
    TextArrayOptions, "Text array options" {
        default_value / set_default_value ("text-array-default-value"): String,
        source_fields / set_source_fields ("text-array-source-fields"): String,
        return_enabled / set_return_enabled ("text-array-return-enabled"): bool,
        highlight_enabled / set_highlight_enabled ("text-array-highlight-enabled"): bool,
        analysis_scheme / set_analysis_scheme ("text-array-analysis-scheme"): String,
    }
}

options! {
    DateArrayOptions, "Date array options" {
        default_value / set_default_value ("date-array-default-value"): String,
        source_fields / set_source_fields ("date-array-source-fields"): String,
        facet_enabled / set_facet_enabled ("date-array-facet-enabled"): bool,
        search_enabled / set_search_enabled ("date-array-search-enabled"): bool,
        return_enabled / set_return_enabled ("date-array-return-enabled"): bool,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexFieldType {
    Int,
    Double,
    Literal,
    Text,
    Date,
    Latlon,
    IntArray,
    DoubleArray,
    LiteralArray,
    TextArray,
    DateArray,
}

impl IndexFieldType {
    /// The service's name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexFieldType::Int => "int",
            IndexFieldType::Double => "double",
            IndexFieldType::Literal => "literal",
            IndexFieldType::Text => "text",
            IndexFieldType::Date => "date",
            IndexFieldType::Latlon => "latlon",
            IndexFieldType::IntArray => "int-array",
            IndexFieldType::DoubleArray => "double-array",
            IndexFieldType::LiteralArray => "literal-array",
            IndexFieldType::TextArray => "text-array",
            IndexFieldType::DateArray => "date-array",
        }
    }
}

/// An index field and the options block of its type.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexField {
    pub index_field_name: String,
    pub index_field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int_options: Option<IntOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_options: Option<DoubleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal_options: Option<LiteralOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_options: Option<TextOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_options: Option<DateOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat_lon_options: Option<LatLonOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int_array_options: Option<IntArrayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_array_options: Option<DoubleArrayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal_array_options: Option<LiteralArrayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_array_options: Option<TextArrayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_array_options: Option<DateArrayOptions>,
}

impl TryFrom<&IndexField> for aws::IndexField {
    type Error = aws_sdk_cloudsearch::error::BuildError;

    fn try_from(value: &IndexField) -> Result<Self, Self::Error> {
        aws::IndexField::builder()
            .index_field_name(&value.index_field_name)
            .index_field_type(aws::IndexFieldType::from(value.index_field_type.as_str()))
            .set_int_options(value.int_options.as_ref().map(Into::into))
            .set_double_options(value.double_options.as_ref().map(Into::into))
            .set_literal_options(value.literal_options.as_ref().map(Into::into))
            .set_text_options(value.text_options.as_ref().map(Into::into))
            .set_date_options(value.date_options.as_ref().map(Into::into))
            .set_lat_lon_options(value.lat_lon_options.as_ref().map(Into::into))
            .set_int_array_options(value.int_array_options.as_ref().map(Into::into))
            .set_double_array_options(value.double_array_options.as_ref().map(Into::into))
            .set_literal_array_options(value.literal_array_options.as_ref().map(Into::into))
            .set_text_array_options(value.text_array_options.as_ref().map(Into::into))
            .set_date_array_options(value.date_array_options.as_ref().map(Into::into))
            .build()
    }
}

impl From<&aws::IndexField> for IndexField {
    fn from(value: &aws::IndexField) -> Self {
        IndexField {
            index_field_name: text(value.index_field_name()).unwrap_or_default(),
            index_field_type: display(value.index_field_type()).unwrap_or_default(),
            int_options: value.int_options().map(Into::into),
            double_options: value.double_options().map(Into::into),
            literal_options: value.literal_options().map(Into::into),
            text_options: value.text_options().map(Into::into),
            date_options: value.date_options().map(Into::into),
            lat_lon_options: value.lat_lon_options().map(Into::into),
            int_array_options: value.int_array_options().map(Into::into),
            double_array_options: value.double_array_options().map(Into::into),
            literal_array_options: value.literal_array_options().map(Into::into),
            text_array_options: value.text_array_options().map(Into::into),
            date_array_options: value.date_array_options().map(Into::into),
        }
    }
}

/// The desired instance type and counts of a search domain.
#[derive(Clone, Debug, Default, PartialEq, clap::Args, serde::Serialize, OptionGroup)]
#[command(next_help_heading = "Scaling parameters")]
#[serde(rename_all = "PascalCase")]
pub struct ScalingParameters {
    /// Instance type, eg `search.small`.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_instance_type: Option<String>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_replication_count: Option<i32>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_partition_count: Option<i32>,
}

impl From<&ScalingParameters> for aws::ScalingParameters {
    fn from(value: &ScalingParameters) -> Self {
        aws::ScalingParameters::builder()
            .set_desired_instance_type(
                value
                    .desired_instance_type
                    .as_deref()
                    .map(aws::PartitionInstanceType::from),
            )
            .set_desired_replication_count(value.desired_replication_count)
            .set_desired_partition_count(value.desired_partition_count)
            .build()
    }
}

impl From<&aws::ScalingParameters> for ScalingParameters {
    fn from(value: &aws::ScalingParameters) -> Self {
        ScalingParameters {
            desired_instance_type: display(value.desired_instance_type()),
            desired_replication_count: value.desired_replication_count().member(),
            desired_partition_count: value.desired_partition_count().member(),
        }
    }
}

/// The status of a domain configuration option.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_deletion: Option<bool>,
}

impl From<&aws::OptionStatus> for OptionStatus {
    fn from(value: &aws::OptionStatus) -> Self {
        OptionStatus {
            creation_date: display(value.creation_date()),
            update_date: display(value.update_date()),
            update_version: value.update_version().member(),
            state: display(value.state()),
            pending_deletion: value.pending_deletion().member(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFieldStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

impl From<&aws::IndexFieldStatus> for IndexFieldStatus {
    fn from(value: &aws::IndexFieldStatus) -> Self {
        IndexFieldStatus {
            options: value.options().member().map(Into::into),
            status: value.status().member().map(Into::into),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stemming_dictionary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub japanese_tokenization_dictionary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithmic_stemming: Option<String>,
}

impl From<&aws::AnalysisOptions> for AnalysisOptions {
    fn from(value: &aws::AnalysisOptions) -> Self {
        AnalysisOptions {
            synonyms: text(value.synonyms()),
            stopwords: text(value.stopwords()),
            stemming_dictionary: text(value.stemming_dictionary()),
            japanese_tokenization_dictionary: text(value.japanese_tokenization_dictionary()),
            algorithmic_stemming: display(value.algorithmic_stemming()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_scheme_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_scheme_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_options: Option<AnalysisOptions>,
}

impl From<&aws::AnalysisScheme> for AnalysisScheme {
    fn from(value: &aws::AnalysisScheme) -> Self {
        AnalysisScheme {
            analysis_scheme_name: text(value.analysis_scheme_name()),
            analysis_scheme_language: display(value.analysis_scheme_language()),
            analysis_options: value.analysis_options().member().map(Into::into),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisSchemeStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AnalysisScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

impl From<&aws::AnalysisSchemeStatus> for AnalysisSchemeStatus {
    fn from(value: &aws::AnalysisSchemeStatus) -> Self {
        AnalysisSchemeStatus {
            options: value.options().member().map(Into::into),
            status: value.status().member().map(Into::into),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl From<&aws::ServiceEndpoint> for ServiceEndpoint {
    fn from(value: &aws::ServiceEndpoint) -> Self {
        ServiceEndpoint {
            endpoint: text(value.endpoint()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Limits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_replication_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_partition_count: Option<i32>,
}

impl From<&aws::Limits> for Limits {
    fn from(value: &aws::Limits) -> Self {
        Limits {
            maximum_replication_count: value.maximum_replication_count().member(),
            maximum_partition_count: value.maximum_partition_count().member(),
        }
    }
}

/// The current status of a search domain.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_service: Option<ServiceEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_service: Option<ServiceEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_index_documents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_partition_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<Limits>,
}

impl From<&aws::DomainStatus> for DomainStatus {
    fn from(value: &aws::DomainStatus) -> Self {
        DomainStatus {
            domain_id: text(value.domain_id()),
            domain_name: text(value.domain_name()),
            arn: text(value.arn()),
            created: value.created().member(),
            deleted: value.deleted().member(),
            doc_service: value.doc_service().member().map(Into::into),
            search_service: value.search_service().member().map(Into::into),
            requires_index_documents: value.requires_index_documents().member(),
            processing: value.processing().member(),
            search_instance_type: text(value.search_instance_type()),
            search_partition_count: value.search_partition_count().member(),
            search_instance_count: value.search_instance_count().member(),
            limits: value.limits().member().map(Into::into),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingParametersStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ScalingParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// A request naming a single search domain.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainRequest {
    pub domain_name: String,
}

/// Gets the analysis schemes configured for a domain.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnalysisSchemes {
    /// The name of the domain.
    #[arg(long)]
    pub domain_name: String,
    /// Limit the output to these analysis schemes.
    #[arg(long, num_args = 0..)]
    pub analysis_scheme_names: Option<Vec<String>>,
    /// Show the deployed configuration (`true`) or include pending changes (`false`).
    #[arg(long)]
    pub deployed: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnalysisSchemesRequest {
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_scheme_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAnalysisSchemesResponse {
    pub analysis_schemes: Vec<AnalysisSchemeStatus>,
}

impl Cmdlet for DescribeAnalysisSchemes {
    const NAME: &'static str = "cloudsearch:DescribeAnalysisSchemes";
    const DEFAULT_SELECT: &'static str = "AnalysisSchemes";

    type Provider = SdkConfig;
    type Request = DescribeAnalysisSchemesRequest;
    type Response = DescribeAnalysisSchemesResponse;

    fn request(&self) -> Self::Request {
        DescribeAnalysisSchemesRequest {
            domain_name: self.domain_name.clone(),
            analysis_scheme_names: self.analysis_scheme_names.clone(),
            deployed: self.deployed,
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .describe_analysis_schemes()
            .domain_name(&request.domain_name)
            .set_analysis_scheme_names(request.analysis_scheme_names.clone())
            .set_deployed(request.deployed)
            .send()
            .await?;
        Ok(DescribeAnalysisSchemesResponse {
            analysis_schemes: records(out.analysis_schemes()),
        })
    }
}

/// Configures an index field for a domain.
///
/// Only the options block matching the field's type should be given. A
/// block none of whose flags were given is left out of the request.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefineIndexField {
    #[arg(long)]
    pub domain_name: String,
    /// Name of the field, or a dynamic field pattern such as `*_i`.
    #[arg(long)]
    pub index_field_name: String,
    #[arg(long, value_enum)]
    pub index_field_type: IndexFieldType,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub int_options: IntOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub double_options: DoubleOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub literal_options: LiteralOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub text_options: TextOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub date_options: DateOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub lat_lon_options: LatLonOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub int_array_options: IntArrayOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub double_array_options: DoubleArrayOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub literal_array_options: LiteralArrayOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub text_array_options: TextArrayOptions,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub date_array_options: DateArrayOptions,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefineIndexFieldRequest {
    pub domain_name: String,
    pub index_field: IndexField,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFieldResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_field: Option<IndexFieldStatus>,
}

impl Cmdlet for DefineIndexField {
    const NAME: &'static str = "cloudsearch:DefineIndexField";
    const DEFAULT_SELECT: &'static str = "IndexField";

    type Provider = SdkConfig;
    type Request = DefineIndexFieldRequest;
    type Response = IndexFieldResponse;

    fn request(&self) -> Self::Request {
        DefineIndexFieldRequest {
            domain_name: self.domain_name.clone(),
            index_field: IndexField {
                index_field_name: self.index_field_name.clone(),
                index_field_type: self.index_field_type.as_str().to_owned(),
                int_options: group(self.int_options.clone()),
                double_options: group(self.double_options.clone()),
                literal_options: group(self.literal_options.clone()),
                text_options: group(self.text_options.clone()),
                date_options: group(self.date_options.clone()),
                lat_lon_options: group(self.lat_lon_options.clone()),
                int_array_options: group(self.int_array_options.clone()),
                double_array_options: group(self.double_array_options.clone()),
                literal_array_options: group(self.literal_array_options.clone()),
                text_array_options: group(self.text_array_options.clone()),
                date_array_options: group(self.date_array_options.clone()),
            },
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let index_field = aws::IndexField::try_from(&request.index_field)?;
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .define_index_field()
            .domain_name(&request.domain_name)
            .index_field(index_field)
            .send()
            .await?;
        Ok(IndexFieldResponse {
            index_field: out.index_field().member().map(Into::into),
        })
    }
}

/// Gets the index fields configured for a domain.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIndexFields {
    #[arg(long)]
    pub domain_name: String,
    /// Limit the output to these fields.
    #[arg(long, num_args = 0..)]
    pub field_names: Option<Vec<String>>,
    #[arg(long)]
    pub deployed: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIndexFieldsRequest {
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIndexFieldsResponse {
    pub index_fields: Vec<IndexFieldStatus>,
}

impl Cmdlet for DescribeIndexFields {
    const NAME: &'static str = "cloudsearch:DescribeIndexFields";
    const DEFAULT_SELECT: &'static str = "IndexFields";

    type Provider = SdkConfig;
    type Request = DescribeIndexFieldsRequest;
    type Response = DescribeIndexFieldsResponse;

    fn request(&self) -> Self::Request {
        DescribeIndexFieldsRequest {
            domain_name: self.domain_name.clone(),
            field_names: self.field_names.clone(),
            deployed: self.deployed,
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .describe_index_fields()
            .domain_name(&request.domain_name)
            .set_field_names(request.field_names.clone())
            .set_deployed(request.deployed)
            .send()
            .await?;
        Ok(DescribeIndexFieldsResponse {
            index_fields: records(out.index_fields()),
        })
    }
}

/// Removes an index field from a domain's configuration.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIndexField {
    #[arg(long)]
    pub domain_name: String,
    #[arg(long)]
    pub index_field_name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIndexFieldRequest {
    pub domain_name: String,
    pub index_field_name: String,
}

impl Cmdlet for DeleteIndexField {
    const NAME: &'static str = "cloudsearch:DeleteIndexField";
    const DEFAULT_SELECT: &'static str = "IndexField";

    type Provider = SdkConfig;
    type Request = DeleteIndexFieldRequest;
    type Response = IndexFieldResponse;

    fn request(&self) -> Self::Request {
        DeleteIndexFieldRequest {
            domain_name: self.domain_name.clone(),
            index_field_name: self.index_field_name.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .delete_index_field()
            .domain_name(&request.domain_name)
            .index_field_name(&request.index_field_name)
            .send()
            .await?;
        Ok(IndexFieldResponse {
            index_field: out.index_field().member().map(Into::into),
        })
    }
}

/// Gets the status of search domains, all of them when no names are given.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomains {
    #[arg(long, num_args = 0..)]
    pub domain_names: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_names: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainsResponse {
    pub domain_status_list: Vec<DomainStatus>,
}

impl Cmdlet for DescribeDomains {
    const NAME: &'static str = "cloudsearch:DescribeDomains";
    const DEFAULT_SELECT: &'static str = "DomainStatusList";

    type Provider = SdkConfig;
    type Request = DescribeDomainsRequest;
    type Response = DescribeDomainsResponse;

    fn request(&self) -> Self::Request {
        DescribeDomainsRequest {
            domain_names: self.domain_names.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .describe_domains()
            .set_domain_names(request.domain_names.clone())
            .send()
            .await?;
        Ok(DescribeDomainsResponse {
            domain_status_list: records(out.domain_status_list()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_status: Option<DomainStatus>,
}

/// Creates a new search domain.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDomain {
    /// Lower case letters, digits and hyphens, starting with a letter.
    #[arg(long)]
    pub domain_name: String,
}

impl Cmdlet for CreateDomain {
    const NAME: &'static str = "cloudsearch:CreateDomain";
    const DEFAULT_SELECT: &'static str = "DomainStatus";

    type Provider = SdkConfig;
    type Request = DomainRequest;
    type Response = DomainStatusResponse;

    fn request(&self) -> Self::Request {
        DomainRequest {
            domain_name: self.domain_name.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .create_domain()
            .domain_name(&request.domain_name)
            .send()
            .await?;
        log::info!("domain {} creation started", request.domain_name);
        Ok(DomainStatusResponse {
            domain_status: out.domain_status().member().map(Into::into),
        })
    }
}

/// Permanently deletes a search domain and all of its data.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDomain {
    #[arg(long)]
    pub domain_name: String,
}

impl Cmdlet for DeleteDomain {
    const NAME: &'static str = "cloudsearch:DeleteDomain";
    const DEFAULT_SELECT: &'static str = "DomainStatus";

    type Provider = SdkConfig;
    type Request = DomainRequest;
    type Response = DomainStatusResponse;

    fn request(&self) -> Self::Request {
        DomainRequest {
            domain_name: self.domain_name.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .delete_domain()
            .domain_name(&request.domain_name)
            .send()
            .await?;
        Ok(DomainStatusResponse {
            domain_status: out.domain_status().member().map(Into::into),
        })
    }
}

/// Tells a domain to index its documents with the latest configuration.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexDocuments {
    #[arg(long)]
    pub domain_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexDocumentsResponse {
    pub field_names: Vec<String>,
}

impl Cmdlet for IndexDocuments {
    const NAME: &'static str = "cloudsearch:IndexDocuments";
    const DEFAULT_SELECT: &'static str = "FieldNames";

    type Provider = SdkConfig;
    type Request = DomainRequest;
    type Response = IndexDocumentsResponse;

    fn request(&self) -> Self::Request {
        DomainRequest {
            domain_name: self.domain_name.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .index_documents()
            .domain_name(&request.domain_name)
            .send()
            .await?;
        Ok(IndexDocumentsResponse {
            field_names: out.field_names().to_vec(),
        })
    }
}

/// Turns Multi-AZ on or off for a domain.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAvailabilityOptions {
    #[arg(long)]
    pub domain_name: String,
    #[arg(long, action = clap::ArgAction::Set, required = true)]
    #[serde(rename = "MultiAZ")]
    pub multi_az: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAvailabilityOptionsRequest {
    pub domain_name: String,
    #[serde(rename = "MultiAZ")]
    pub multi_az: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAvailabilityOptionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_options: Option<AvailabilityOptionsStatus>,
}

impl Cmdlet for UpdateAvailabilityOptions {
    const NAME: &'static str = "cloudsearch:UpdateAvailabilityOptions";
    const DEFAULT_SELECT: &'static str = "AvailabilityOptions";

    type Provider = SdkConfig;
    type Request = UpdateAvailabilityOptionsRequest;
    type Response = UpdateAvailabilityOptionsResponse;

    fn request(&self) -> Self::Request {
        UpdateAvailabilityOptionsRequest {
            domain_name: self.domain_name.clone(),
            multi_az: self.multi_az,
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .update_availability_options()
            .domain_name(&request.domain_name)
            .multi_az(request.multi_az)
            .send()
            .await?;
        let availability_options =
            out.availability_options()
                .member()
                .map(|status| AvailabilityOptionsStatus {
                    options: status.options().member(),
                    status: status.status().member().map(Into::into),
                });
        Ok(UpdateAvailabilityOptionsResponse {
            availability_options,
        })
    }
}

/// Configures scaling for a domain.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateScalingParameters {
    #[arg(long)]
    pub domain_name: String,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub scaling_parameters: ScalingParameters,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateScalingParametersRequest {
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_parameters: Option<ScalingParameters>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateScalingParametersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_parameters: Option<ScalingParametersStatus>,
}

impl Cmdlet for UpdateScalingParameters {
    const NAME: &'static str = "cloudsearch:UpdateScalingParameters";
    const DEFAULT_SELECT: &'static str = "ScalingParameters";

    type Provider = SdkConfig;
    type Request = UpdateScalingParametersRequest;
    type Response = UpdateScalingParametersResponse;

    fn request(&self) -> Self::Request {
        UpdateScalingParametersRequest {
            domain_name: self.domain_name.clone(),
            scaling_parameters: group(self.scaling_parameters.clone()),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_cloudsearch::Client::new(cfg);
        let out = client
            .update_scaling_parameters()
            .domain_name(&request.domain_name)
            .set_scaling_parameters(request.scaling_parameters.as_ref().map(Into::into))
            .send()
            .await?;
        let scaling_parameters =
            out.scaling_parameters()
                .member()
                .map(|status| ScalingParametersStatus {
                    options: status.options().member().map(Into::into),
                    status: status.status().member().map(Into::into),
                });
        Ok(UpdateScalingParametersResponse { scaling_parameters })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use aws_sdk_cloudsearch::primitives::DateTime;

    use super::*;
    use crate::{aws::bind, Select};

    #[test]
    fn describe_analysis_schemes_deployed() {
        let command: DescribeAnalysisSchemes =
            bind(&["--domain-name", "movies", "--deployed", "true"]).unwrap();
        assert_eq!(
            json!({ "DomainName": "movies", "Deployed": true }),
            serde_json::to_value(command.request()).unwrap()
        );
    }

    #[test]
    fn describe_analysis_schemes_unbound_deployed() {
        let command: DescribeAnalysisSchemes = bind(&["--domain-name", "movies"]).unwrap();
        let request = command.request();
        assert_eq!(None, request.deployed);
        assert_eq!(
            json!({ "DomainName": "movies" }),
            serde_json::to_value(request).unwrap()
        );

        // The context still reports the unbound parameter, as null.
        assert_eq!(
            json!({ "DomainName": "movies", "AnalysisSchemeNames": null, "Deployed": null }),
            serde_json::to_value(&command).unwrap()
        );
    }

    #[test]
    fn falsy_values_are_sent() {
        let command: DescribeIndexFields =
            bind(&["--domain-name", "movies", "--deployed", "false"]).unwrap();
        assert_eq!(Some(false), command.request().deployed);
    }

    #[test]
    fn empty_list_is_distinct_from_no_list() {
        let command: DescribeDomains = bind(&[]).unwrap();
        assert_eq!(json!({}), serde_json::to_value(command.request()).unwrap());

        let command: DescribeDomains = bind(&["--domain-names"]).unwrap();
        assert_eq!(
            json!({ "DomainNames": [] }),
            serde_json::to_value(command.request()).unwrap()
        );

        let command: DescribeDomains = bind(&["--domain-names", "movies", "books"]).unwrap();
        assert_eq!(
            Some(vec!["movies".to_owned(), "books".to_owned()]),
            command.request().domain_names
        );
    }

    #[test]
    fn define_index_field_without_options() {
        let command: DefineIndexField = bind(&[
            "--domain-name",
            "movies",
            "--index-field-name",
            "title",
            "--index-field-type",
            "text",
        ])
        .unwrap();
        assert_eq!(
            json!({
                "DomainName": "movies",
                "IndexField": { "IndexFieldName": "title", "IndexFieldType": "text" },
            }),
            serde_json::to_value(command.request()).unwrap()
        );
    }

    #[test]
    fn define_index_field_keeps_only_bound_groups() {
        let command: DefineIndexField = bind(&[
            "--domain-name",
            "movies",
            "--index-field-name",
            "year",
            "--index-field-type",
            "int-array",
            "--int-array-facet-enabled",
            "false",
            "--int-array-default-value",
            "0",
        ])
        .unwrap();
        let request = command.request();
        assert_eq!("int-array", request.index_field.index_field_type);
        assert_eq!(
            Some(IntArrayOptions {
                default_value: Some(0),
                facet_enabled: Some(false),
                ..Default::default()
            }),
            request.index_field.int_array_options
        );
        assert_eq!(None, request.index_field.int_options);
        assert_eq!(None, request.index_field.text_array_options);
        assert_eq!(
            json!({
                "DomainName": "movies",
                "IndexField": {
                    "IndexFieldName": "year",
                    "IndexFieldType": "int-array",
                    "IntArrayOptions": { "DefaultValue": 0, "FacetEnabled": false },
                },
            }),
            serde_json::to_value(&request).unwrap()
        );
    }

    #[test]
    fn index_field_converts_to_the_sdk_type() {
        let field = IndexField {
            index_field_name: "title".into(),
            index_field_type: "text".into(),
            text_options: Some(TextOptions {
                highlight_enabled: Some(true),
                analysis_scheme: Some("_en_default_".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let sdk = aws::IndexField::try_from(&field).unwrap();
        assert_eq!(Some("text".to_owned()), display(sdk.index_field_type()));
        assert_eq!(
            Some("_en_default_"),
            sdk.text_options().and_then(|options| options.analysis_scheme())
        );
        assert!(sdk.int_options().is_none());
        assert_eq!(field, IndexField::from(&sdk));
    }

    #[test]
    fn scaling_parameters_group() {
        let command: UpdateScalingParameters = bind(&["--domain-name", "movies"]).unwrap();
        assert_eq!(None, command.request().scaling_parameters);

        let command: UpdateScalingParameters = bind(&[
            "--domain-name",
            "movies",
            "--desired-replication-count",
            "0",
        ])
        .unwrap();
        assert_eq!(
            json!({
                "DomainName": "movies",
                "ScalingParameters": { "DesiredReplicationCount": 0 },
            }),
            serde_json::to_value(command.request()).unwrap()
        );
    }

    #[test]
    fn multi_az_is_required() {
        assert!(bind::<UpdateAvailabilityOptions>(&["--domain-name", "movies"]).is_err());
        let command: UpdateAvailabilityOptions =
            bind(&["--domain-name", "movies", "--multi-az", "false"]).unwrap();
        assert_eq!(
            json!({ "DomainName": "movies", "MultiAZ": false }),
            serde_json::to_value(command.request()).unwrap()
        );
    }

    fn option_status(state: aws::OptionState) -> aws::OptionStatus {
        aws::OptionStatus::builder()
            .creation_date(DateTime::from_secs(1_709_294_400))
            .update_date(DateTime::from_secs(1_709_294_400))
            .update_version(0)
            .state(state)
            .build()
            .unwrap()
    }

    #[test]
    fn option_status_record() {
        let status = OptionStatus::from(&option_status(aws::OptionState::Active));
        assert_eq!(
            json!({
                "CreationDate": "2024-03-01T12:00:00Z",
                "UpdateDate": "2024-03-01T12:00:00Z",
                "UpdateVersion": 0,
                "State": "Active",
            }),
            serde_json::to_value(&status).unwrap()
        );
    }

    #[test]
    fn domain_status_record() {
        let sdk = aws::DomainStatus::builder()
            .domain_id("123456789012/movies")
            .domain_name("movies")
            .arn("arn:aws:cloudsearch:us-east-1:123456789012:domain/movies")
            .created(true)
            .requires_index_documents(false)
            .search_service(
                aws::ServiceEndpoint::builder()
                    .endpoint("search-movies.us-east-1.cloudsearch.amazonaws.com")
                    .build(),
            )
            .limits(
                aws::Limits::builder()
                    .maximum_replication_count(5)
                    .maximum_partition_count(10)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(
            json!({
                "DomainId": "123456789012/movies",
                "DomainName": "movies",
                "ARN": "arn:aws:cloudsearch:us-east-1:123456789012:domain/movies",
                "Created": true,
                "SearchService": {
                    "Endpoint": "search-movies.us-east-1.cloudsearch.amazonaws.com",
                },
                "RequiresIndexDocuments": false,
                "Limits": { "MaximumReplicationCount": 5, "MaximumPartitionCount": 10 },
            }),
            serde_json::to_value(DomainStatus::from(&sdk)).unwrap()
        );
    }

    #[test]
    fn analysis_scheme_records_and_selection() {
        let sdk = aws::AnalysisSchemeStatus::builder()
            .options(
                aws::AnalysisScheme::builder()
                    .analysis_scheme_name("simple_en")
                    .analysis_scheme_language(aws::AnalysisSchemeLanguage::En)
                    .analysis_options(
                        aws::AnalysisOptions::builder()
                            .algorithmic_stemming(aws::AlgorithmicStemming::Light)
                            .build(),
                    )
                    .build()
                    .unwrap(),
            )
            .status(option_status(aws::OptionState::RequiresIndexDocuments))
            .build();
        let response = serde_json::to_value(DescribeAnalysisSchemesResponse {
            analysis_schemes: records(std::slice::from_ref(&sdk)),
        })
        .unwrap();
        assert_eq!(
            json!({
                "AnalysisSchemes": [{
                    "Options": {
                        "AnalysisSchemeName": "simple_en",
                        "AnalysisSchemeLanguage": "en",
                        "AnalysisOptions": { "AlgorithmicStemming": "light" },
                    },
                    "Status": {
                        "CreationDate": "2024-03-01T12:00:00Z",
                        "UpdateDate": "2024-03-01T12:00:00Z",
                        "UpdateVersion": 0,
                        "State": "RequiresIndexDocuments",
                    },
                }],
            }),
            response
        );

        let select: Select = "AnalysisSchemes.Options.AnalysisSchemeName".parse().unwrap();
        assert_eq!(
            vec![json!("simple_en")],
            select.project(&json!({}), &response).unwrap()
        );
    }

    #[test]
    fn unbound_option_groups_select_nothing() {
        let command: DefineIndexField = bind(&[
            "--domain-name",
            "movies",
            "--index-field-name",
            "year",
            "--index-field-type",
            "int",
            "--int-facet-enabled",
            "true",
        ])
        .unwrap();
        let context = serde_json::to_value(&command).unwrap();
        assert_eq!(json!(null), context["TextOptions"]);
        assert_eq!(json!({ "FacetEnabled": true }), context["IntOptions"]);

        let select: Select = "^TextOptions".parse().unwrap();
        assert!(select.project(&context, &json!({})).unwrap().is_empty());
        let select: Select = "^IntOptions".parse().unwrap();
        assert_eq!(
            vec![json!({ "FacetEnabled": true })],
            select.project(&context, &json!({})).unwrap()
        );
    }

    #[test]
    fn index_field_type_names() {
        use clap::ValueEnum;

        for variant in IndexFieldType::value_variants() {
            let name = variant.to_possible_value().unwrap();
            assert_eq!(variant.as_str(), name.get_name());
            assert_eq!(
                json!(variant.as_str()),
                serde_json::to_value(variant).unwrap()
            );
        }
    }
}
