//! AWS Systems Manager Incident Manager contacts and engagements.
use anyhow::Context;
use aws_config::SdkConfig;
use aws_sdk_ssmcontacts::{
    error::BuildError,
    primitives::{DateTime, DateTimeFormat},
    types as aws,
};

use super::{display, list, records, text, Member};
use crate::{
    group::{group, OptionGroup},
    Cmdlet,
};

fn json<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(s)
}

/// Accepts an RFC3339 timestamp, eg `2024-03-01T12:00:00Z` or
/// `2024-03-01T14:00:00+02:00`.
fn timestamp(s: &str) -> Result<String, String> {
    DateTime::from_str(s, DateTimeFormat::DateTimeWithOffset)
        .map(|_| s.to_owned())
        .map_err(|e| format!("expected an RFC3339 timestamp: {e}"))
}

fn parse_timestamp(s: &str) -> anyhow::Result<DateTime> {
    DateTime::from_str(s, DateTimeFormat::DateTimeWithOffset)
        .with_context(|| format!("invalid timestamp '{s}'"))
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    Personal,
    Escalation,
    OncallSchedule,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Personal => "PERSONAL",
            ContactType::Escalation => "ESCALATION",
            ContactType::OncallSchedule => "ONCALL_SCHEDULE",
        }
    }
}

impl From<ContactType> for aws::ContactType {
    fn from(value: ContactType) -> Self {
        aws::ContactType::from(value.as_str())
    }
}

/// A key-value pair, given on the command line as `Key=Value`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected Key=Value, got '{s}'"))?;
        if key.is_empty() {
            return Err(format!("tag '{s}' has an empty key"));
        }
        Ok(Tag {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

impl From<&Tag> for aws::Tag {
    fn from(value: &Tag) -> Self {
        aws::Tag::builder()
            .key(&value.key)
            .value(&value.value)
            .build()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelTargetInfo {
    pub contact_channel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_interval_in_minutes: Option<i32>,
}

impl TryFrom<&ChannelTargetInfo> for aws::ChannelTargetInfo {
    type Error = BuildError;

    fn try_from(value: &ChannelTargetInfo) -> Result<Self, Self::Error> {
        aws::ChannelTargetInfo::builder()
            .contact_channel_id(&value.contact_channel_id)
            .set_retry_interval_in_minutes(value.retry_interval_in_minutes)
            .build()
    }
}

impl From<&aws::ChannelTargetInfo> for ChannelTargetInfo {
    fn from(value: &aws::ChannelTargetInfo) -> Self {
        ChannelTargetInfo {
            contact_channel_id: text(value.contact_channel_id()).unwrap_or_default(),
            retry_interval_in_minutes: value.retry_interval_in_minutes().member(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactTargetInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    pub is_essential: bool,
}

impl TryFrom<&ContactTargetInfo> for aws::ContactTargetInfo {
    type Error = BuildError;

    fn try_from(value: &ContactTargetInfo) -> Result<Self, Self::Error> {
        aws::ContactTargetInfo::builder()
            .set_contact_id(value.contact_id.clone())
            .is_essential(value.is_essential)
            .build()
    }
}

impl From<&aws::ContactTargetInfo> for ContactTargetInfo {
    fn from(value: &aws::ContactTargetInfo) -> Self {
        ContactTargetInfo {
            contact_id: text(value.contact_id()),
            is_essential: value.is_essential().member().unwrap_or_default(),
        }
    }
}

/// Who is engaged in a stage: a contact channel or another contact.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Target {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_target_info: Option<ChannelTargetInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_target_info: Option<ContactTargetInfo>,
}

impl TryFrom<&Target> for aws::Target {
    type Error = BuildError;

    fn try_from(value: &Target) -> Result<Self, Self::Error> {
        Ok(aws::Target::builder()
            .set_channel_target_info(
                value
                    .channel_target_info
                    .as_ref()
                    .map(aws::ChannelTargetInfo::try_from)
                    .transpose()?,
            )
            .set_contact_target_info(
                value
                    .contact_target_info
                    .as_ref()
                    .map(aws::ContactTargetInfo::try_from)
                    .transpose()?,
            )
            .build())
    }
}

impl From<&aws::Target> for Target {
    fn from(value: &aws::Target) -> Self {
        Target {
            channel_target_info: value.channel_target_info().map(Into::into),
            contact_target_info: value.contact_target_info().map(Into::into),
        }
    }
}

/// One stage of an escalation plan.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stage {
    pub duration_in_minutes: i32,
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl TryFrom<&Stage> for aws::Stage {
    type Error = BuildError;

    fn try_from(value: &Stage) -> Result<Self, Self::Error> {
        let targets = value
            .targets
            .iter()
            .map(aws::Target::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        aws::Stage::builder()
            .duration_in_minutes(value.duration_in_minutes)
            .set_targets(Some(targets))
            .build()
    }
}

impl From<&aws::Stage> for Stage {
    fn from(value: &aws::Stage) -> Self {
        Stage {
            duration_in_minutes: value.duration_in_minutes().member().unwrap_or_default(),
            targets: records(value.targets()),
        }
    }
}

/// The engagement plan of a contact.
///
/// Passing `--plan-stages` with no values sends a plan with no stages.
#[derive(Clone, Debug, Default, PartialEq, clap::Args, serde::Serialize, OptionGroup)]
#[command(next_help_heading = "Plan")]
#[serde(rename_all = "PascalCase")]
pub struct Plan {
    /// A stage as JSON, eg `{"DurationInMinutes":5,"Targets":[...]}`.
    #[arg(id = "plan-stages", long = "plan-stages", num_args = 0.., value_parser = json::<Stage>)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<Stage>>,
    /// On-call rotations to engage, for on-call schedule contacts.
    #[arg(id = "plan-rotation-ids", long = "plan-rotation-ids", num_args = 0..)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_ids: Option<Vec<String>>,
}

impl TryFrom<&Plan> for aws::Plan {
    type Error = BuildError;

    fn try_from(value: &Plan) -> Result<Self, Self::Error> {
        let stages = value
            .stages
            .as_ref()
            .map(|stages| {
                stages
                    .iter()
                    .map(aws::Stage::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(aws::Plan::builder()
            .set_stages(stages)
            .set_rotation_ids(value.rotation_ids.clone())
            .build())
    }
}

impl From<&aws::Plan> for Plan {
    fn from(value: &aws::Plan) -> Self {
        Plan {
            stages: list(value.stages(), |stage| Stage::from(stage)),
            rotation_ids: list(value.rotation_ids(), Clone::clone),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
}

impl From<&aws::Contact> for Contact {
    fn from(value: &aws::Contact) -> Self {
        Contact {
            contact_arn: text(value.contact_arn()),
            alias: text(value.alias()),
            display_name: text(value.display_name()),
            contact_type: display(value.r#type()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Engagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_time: Option<String>,
}

impl From<&aws::Engagement> for Engagement {
    fn from(value: &aws::Engagement) -> Self {
        Engagement {
            engagement_arn: text(value.engagement_arn()),
            contact_arn: text(value.contact_arn()),
            sender: text(value.sender()),
            incident_id: text(value.incident_id()),
            start_time: display(value.start_time()),
            stop_time: display(value.stop_time()),
        }
    }
}

/// Lists contacts and escalation plans, one page at a time.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContacts {
    /// Start from this page. Giving a token fetches that page only.
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub max_results: Option<i32>,
    /// Only contacts whose alias starts with this prefix.
    #[arg(long)]
    pub alias_prefix: Option<String>,
    #[arg(id = "type", long = "type", value_enum)]
    #[serde(rename = "Type")]
    pub contact_type: Option<ContactType>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContactsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_prefix: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContactsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    pub contacts: Vec<Contact>,
}

impl Cmdlet for ListContacts {
    const NAME: &'static str = "ssm-contacts:ListContacts";
    const DEFAULT_SELECT: &'static str = "Contacts";

    type Provider = SdkConfig;
    type Request = ListContactsRequest;
    type Response = ListContactsResponse;

    fn request(&self) -> Self::Request {
        ListContactsRequest {
            next_token: self.next_token.clone(),
            max_results: self.max_results,
            alias_prefix: self.alias_prefix.clone(),
            contact_type: self.contact_type,
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_ssmcontacts::Client::new(cfg);
        let out = client
            .list_contacts()
            .set_next_token(request.next_token.clone())
            .set_max_results(request.max_results)
            .set_alias_prefix(request.alias_prefix.clone())
            .set_type(request.contact_type.map(Into::into))
            .send()
            .await?;
        Ok(ListContactsResponse {
            next_token: text(out.next_token()),
            contacts: records(out.contacts()),
        })
    }

    fn continuation(response: &Self::Response) -> Option<String> {
        response.next_token.clone()
    }

    fn token(request: &Self::Request) -> Option<&str> {
        request.next_token.as_deref()
    }

    fn continue_with(request: &mut Self::Request, token: String) {
        request.next_token = Some(token);
    }

    fn auto_iterate(&self) -> bool {
        self.next_token.is_none()
    }
}

/// Gets a contact or escalation plan, including its engagement plan.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContact {
    /// ARN of the contact.
    #[arg(long)]
    pub contact_id: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactRequest {
    pub contact_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
}

impl Cmdlet for GetContact {
    const NAME: &'static str = "ssm-contacts:GetContact";
    const DEFAULT_SELECT: &'static str = "*";

    type Provider = SdkConfig;
    type Request = ContactRequest;
    type Response = GetContactResponse;

    fn request(&self) -> Self::Request {
        ContactRequest {
            contact_id: self.contact_id.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_ssmcontacts::Client::new(cfg);
        let out = client
            .get_contact()
            .contact_id(&request.contact_id)
            .send()
            .await?;
        Ok(GetContactResponse {
            contact_arn: text(out.contact_arn()),
            alias: text(out.alias()),
            display_name: text(out.display_name()),
            contact_type: display(out.r#type()),
            plan: out.plan().member().map(Into::into),
        })
    }
}

/// Creates a contact or escalation plan.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContact {
    /// Short, unique name of the contact.
    #[arg(long)]
    pub alias: String,
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(id = "type", long = "type", value_enum)]
    #[serde(rename = "Type")]
    pub contact_type: ContactType,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub plan: Plan,
    /// Tags as `Key=Value`.
    #[arg(long, num_args = 0..)]
    pub tags: Option<Vec<Tag>>,
    #[arg(long)]
    pub idempotency_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContactRequest {
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "Type")]
    pub contact_type: ContactType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
}

impl Cmdlet for CreateContact {
    const NAME: &'static str = "ssm-contacts:CreateContact";
    const DEFAULT_SELECT: &'static str = "ContactArn";

    type Provider = SdkConfig;
    type Request = CreateContactRequest;
    type Response = CreateContactResponse;

    fn request(&self) -> Self::Request {
        CreateContactRequest {
            alias: self.alias.clone(),
            display_name: self.display_name.clone(),
            contact_type: self.contact_type,
            plan: group(self.plan.clone()),
            tags: self.tags.clone(),
            idempotency_token: self.idempotency_token.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let plan = request
            .plan
            .as_ref()
            .map(aws::Plan::try_from)
            .transpose()
            .context("invalid engagement plan")?;
        let client = aws_sdk_ssmcontacts::Client::new(cfg);
        let out = client
            .create_contact()
            .alias(&request.alias)
            .set_display_name(request.display_name.clone())
            .r#type(request.contact_type.into())
            .set_plan(plan)
            .set_tags(
                request
                    .tags
                    .as_ref()
                    .map(|tags| tags.iter().map(Into::into).collect()),
            )
            .set_idempotency_token(request.idempotency_token.clone())
            .send()
            .await?;
        Ok(CreateContactResponse {
            contact_arn: text(out.contact_arn()),
        })
    }
}

/// Deletes a contact or escalation plan.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteContact {
    #[arg(long)]
    pub contact_id: String,
}

impl Cmdlet for DeleteContact {
    const NAME: &'static str = "ssm-contacts:DeleteContact";
    const DEFAULT_SELECT: &'static str = "^ContactId";
    const PASS_THRU: Option<&'static str> = Some("ContactId");

    type Provider = SdkConfig;
    type Request = ContactRequest;
    type Response = ();

    fn request(&self) -> Self::Request {
        ContactRequest {
            contact_id: self.contact_id.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_ssmcontacts::Client::new(cfg);
        client
            .delete_contact()
            .contact_id(&request.contact_id)
            .send()
            .await?;
        log::info!("deleted contact {}", request.contact_id);
        Ok(())
    }
}

/// Starts an engagement to a contact or escalation plan.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartEngagement {
    #[arg(long)]
    pub contact_id: String,
    /// The user that started the engagement.
    #[arg(long)]
    pub sender: String,
    /// Subject of the email sent to the contact.
    #[arg(long)]
    pub subject: String,
    /// Body of the email, SMS or voice message.
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub public_subject: Option<String>,
    #[arg(long)]
    pub public_content: Option<String>,
    #[arg(long)]
    pub incident_id: Option<String>,
    #[arg(long)]
    pub idempotency_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartEngagementRequest {
    pub contact_id: String,
    pub sender: String,
    pub subject: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartEngagementResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_arn: Option<String>,
}

impl Cmdlet for StartEngagement {
    const NAME: &'static str = "ssm-contacts:StartEngagement";
    const DEFAULT_SELECT: &'static str = "EngagementArn";

    type Provider = SdkConfig;
    type Request = StartEngagementRequest;
    type Response = StartEngagementResponse;

    fn request(&self) -> Self::Request {
        StartEngagementRequest {
            contact_id: self.contact_id.clone(),
            sender: self.sender.clone(),
            subject: self.subject.clone(),
            content: self.content.clone(),
            public_subject: self.public_subject.clone(),
            public_content: self.public_content.clone(),
            incident_id: self.incident_id.clone(),
            idempotency_token: self.idempotency_token.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_ssmcontacts::Client::new(cfg);
        let out = client
            .start_engagement()
            .contact_id(&request.contact_id)
            .sender(&request.sender)
            .subject(&request.subject)
            .content(&request.content)
            .set_public_subject(request.public_subject.clone())
            .set_public_content(request.public_content.clone())
            .set_incident_id(request.incident_id.clone())
            .set_idempotency_token(request.idempotency_token.clone())
            .send()
            .await?;
        Ok(StartEngagementResponse {
            engagement_arn: text(out.engagement_arn()),
        })
    }
}

/// Stops an engagement before it finishes its final stage.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopEngagement {
    #[arg(long)]
    pub engagement_id: String,
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopEngagementRequest {
    pub engagement_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Cmdlet for StopEngagement {
    const NAME: &'static str = "ssm-contacts:StopEngagement";
    const DEFAULT_SELECT: &'static str = "^EngagementId";
    const PASS_THRU: Option<&'static str> = Some("EngagementId");

    type Provider = SdkConfig;
    type Request = StopEngagementRequest;
    type Response = ();

    fn request(&self) -> Self::Request {
        StopEngagementRequest {
            engagement_id: self.engagement_id.clone(),
            reason: self.reason.clone(),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_ssmcontacts::Client::new(cfg);
        client
            .stop_engagement()
            .engagement_id(&request.engagement_id)
            .set_reason(request.reason.clone())
            .send()
            .await?;
        Ok(())
    }
}

/// Bounds on when an engagement started.
#[derive(Clone, Debug, Default, PartialEq, clap::Args, serde::Serialize, OptionGroup)]
#[command(next_help_heading = "Time range")]
#[serde(rename_all = "PascalCase")]
pub struct TimeRange {
    #[arg(long, value_parser = timestamp)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[arg(long, value_parser = timestamp)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl TryFrom<&TimeRange> for aws::TimeRange {
    type Error = anyhow::Error;

    fn try_from(value: &TimeRange) -> Result<Self, Self::Error> {
        Ok(aws::TimeRange::builder()
            .set_start_time(value.start_time.as_deref().map(parse_timestamp).transpose()?)
            .set_end_time(value.end_time.as_deref().map(parse_timestamp).transpose()?)
            .build())
    }
}

/// Lists engagements that have happened, one page at a time.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEngagements {
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub max_results: Option<i32>,
    #[arg(long)]
    pub incident_id: Option<String>,
    #[command(flatten)]
    #[serde(serialize_with = "crate::group::serialize_group")]
    pub time_range_value: TimeRange,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEngagementsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range_value: Option<TimeRange>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEngagementsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    pub engagements: Vec<Engagement>,
}

impl Cmdlet for ListEngagements {
    const NAME: &'static str = "ssm-contacts:ListEngagements";
    const DEFAULT_SELECT: &'static str = "Engagements";

    type Provider = SdkConfig;
    type Request = ListEngagementsRequest;
    type Response = ListEngagementsResponse;

    fn request(&self) -> Self::Request {
        ListEngagementsRequest {
            next_token: self.next_token.clone(),
            max_results: self.max_results,
            incident_id: self.incident_id.clone(),
            time_range_value: group(self.time_range_value.clone()),
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let time_range = request
            .time_range_value
            .as_ref()
            .map(aws::TimeRange::try_from)
            .transpose()?;
        let client = aws_sdk_ssmcontacts::Client::new(cfg);
        let out = client
            .list_engagements()
            .set_next_token(request.next_token.clone())
            .set_max_results(request.max_results)
            .set_incident_id(request.incident_id.clone())
            .set_time_range_value(time_range)
            .send()
            .await?;
        Ok(ListEngagementsResponse {
            next_token: text(out.next_token()),
            engagements: records(out.engagements()),
        })
    }

    fn continuation(response: &Self::Response) -> Option<String> {
        response.next_token.clone()
    }

    fn token(request: &Self::Request) -> Option<&str> {
        request.next_token.as_deref()
    }

    fn continue_with(request: &mut Self::Request, token: String) {
        request.next_token = Some(token);
    }

    fn auto_iterate(&self) -> bool {
        self.next_token.is_none()
    }
}
