//! `tsh`: run AWS service operations from the command line.
//!
//! Every operation prints its output as one JSON document per line. Run with
//! `RUST_LOG=debug` to see bound parameters, requests and pages.
//!
//! ```sh
//! tsh cloudsearch describe-domains
//! tsh --region us-west-2 cloudsearch describe-analysis-schemes --domain-name movies --deployed true
//! tsh ssm-contacts list-contacts --first 10 --select Contacts.Alias
//! tsh ssm-contacts delete-contact --contact-id arn:... --pass-thru
//! ```
use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tsh::{
    aws::{cloudsearch, dynamodb, ssm_contacts, SdkConfig},
    config::Session,
    pipeline::{First, JsonLines},
    Cancellation, Cmdlet, CommandFailure, Invocation, Summary,
};

#[derive(Parser)]
#[command(name = "tsh", version, about = "Run AWS service operations as typed commands")]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    service: Service,
}

#[derive(Args)]
#[command(next_help_heading = "Session")]
struct SessionArgs {
    /// AWS region to send requests to.
    #[arg(long, global = true, env = "AWS_REGION")]
    region: Option<String>,

    /// Named profile from the shared AWS config files.
    #[arg(long, global = true, env = "AWS_PROFILE")]
    profile_name: Option<String>,

    /// Send requests to this endpoint instead of the region's default.
    #[arg(long, global = true, env = "AWS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// TOML file with session defaults. Defaults to `./.teleshell.toml` if it exists.
    #[arg(long, global = true, env = "TELESHELL_CONFIG")]
    config: Option<PathBuf>,
}

impl SessionArgs {
    fn resolve(&self) -> Result<Session, tsh::Error> {
        let flags = Session {
            region: self.region.clone(),
            profile_name: self.profile_name.clone(),
            endpoint_url: self.endpoint_url.clone(),
        };
        Ok(match Session::load(self.config.as_deref(), ".")? {
            Some(file) => flags.or(file),
            None => flags,
        })
    }
}

#[derive(Args)]
#[command(next_help_heading = "Output")]
struct OutputArgs {
    /// What to output: `*` for the whole response, `^Parameter` for a
    /// parameter's value, or a response member such as `Contacts.Alias`.
    #[arg(long, global = true)]
    select: Option<String>,

    /// Output the operation's pass-through parameter.
    #[arg(long, global = true)]
    pass_thru: bool,

    /// Fetch only the first page of list operations.
    #[arg(long, global = true)]
    no_auto_iteration: bool,

    /// Stop after this many output objects.
    #[arg(long, global = true)]
    first: Option<usize>,

    /// Pretty print each JSON document.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Service {
    /// Amazon CloudSearch domain configuration.
    #[command(subcommand)]
    Cloudsearch(CloudSearch),
    /// Incident Manager contacts and engagements.
    #[command(subcommand, name = "ssm-contacts")]
    SsmContacts(SsmContacts),
    /// Amazon DynamoDB.
    #[command(subcommand)]
    Dynamodb(DynamoDb),
}

#[derive(Subcommand)]
enum CloudSearch {
    DescribeAnalysisSchemes(cloudsearch::DescribeAnalysisSchemes),
    DefineIndexField(cloudsearch::DefineIndexField),
    DescribeIndexFields(cloudsearch::DescribeIndexFields),
    DeleteIndexField(cloudsearch::DeleteIndexField),
    DescribeDomains(cloudsearch::DescribeDomains),
    CreateDomain(cloudsearch::CreateDomain),
    DeleteDomain(cloudsearch::DeleteDomain),
    IndexDocuments(cloudsearch::IndexDocuments),
    UpdateAvailabilityOptions(cloudsearch::UpdateAvailabilityOptions),
    UpdateScalingParameters(cloudsearch::UpdateScalingParameters),
}

#[derive(Subcommand)]
enum SsmContacts {
    ListContacts(ssm_contacts::ListContacts),
    GetContact(ssm_contacts::GetContact),
    CreateContact(ssm_contacts::CreateContact),
    DeleteContact(ssm_contacts::DeleteContact),
    StartEngagement(ssm_contacts::StartEngagement),
    StopEngagement(ssm_contacts::StopEngagement),
    ListEngagements(ssm_contacts::ListEngagements),
}

#[derive(Subcommand)]
enum DynamoDb {
    ListTables(dynamodb::ListTables),
}

async fn run<C>(
    invocation: &Invocation<'_, SdkConfig>,
    command: C,
    output: &OutputArgs,
) -> Result<Summary, CommandFailure>
where
    C: Cmdlet<Provider = SdkConfig>,
{
    let sink = JsonLines::new(std::io::stdout()).with_pretty(output.pretty);
    match output.first {
        Some(limit) => invocation.run(command, First::new(limit, sink)).await,
        None => invocation.run(command, sink).await,
    }
}

async fn dispatch(cli: Cli, cancellation: Cancellation) -> Result<Summary, CommandFailure> {
    let session = cli
        .session
        .resolve()
        .map_err(|e| CommandFailure::new("tsh", e))?;
    log::debug!("session: {session:?}");
    let sdk_config = session.sdk_config().await;
    let output = &cli.output;
    let invocation = Invocation::new(&sdk_config)
        .with_endpoint(session.endpoint(&sdk_config))
        .with_select(output.select.clone())
        .with_pass_thru(output.pass_thru)
        .with_auto_iteration(!output.no_auto_iteration)
        .with_cancellation(cancellation);

    match cli.service {
        Service::Cloudsearch(operation) => match operation {
            CloudSearch::DescribeAnalysisSchemes(c) => run(&invocation, c, output).await,
            CloudSearch::DefineIndexField(c) => run(&invocation, c, output).await,
            CloudSearch::DescribeIndexFields(c) => run(&invocation, c, output).await,
            CloudSearch::DeleteIndexField(c) => run(&invocation, c, output).await,
            CloudSearch::DescribeDomains(c) => run(&invocation, c, output).await,
            CloudSearch::CreateDomain(c) => run(&invocation, c, output).await,
            CloudSearch::DeleteDomain(c) => run(&invocation, c, output).await,
            CloudSearch::IndexDocuments(c) => run(&invocation, c, output).await,
            CloudSearch::UpdateAvailabilityOptions(c) => run(&invocation, c, output).await,
            CloudSearch::UpdateScalingParameters(c) => run(&invocation, c, output).await,
        },
        Service::SsmContacts(operation) => match operation {
            SsmContacts::ListContacts(c) => run(&invocation, c, output).await,
            SsmContacts::GetContact(c) => run(&invocation, c, output).await,
            SsmContacts::CreateContact(c) => run(&invocation, c, output).await,
            SsmContacts::DeleteContact(c) => run(&invocation, c, output).await,
            SsmContacts::StartEngagement(c) => run(&invocation, c, output).await,
            SsmContacts::StopEngagement(c) => run(&invocation, c, output).await,
            SsmContacts::ListEngagements(c) => run(&invocation, c, output).await,
        },
        Service::Dynamodb(operation) => match operation {
            DynamoDb::ListTables(c) => run(&invocation, c, output).await,
        },
    }
}

fn report(failure: &CommandFailure) {
    let record = serde_json::to_string(failure).unwrap_or_else(|_| failure.to_string());
    eprintln!("{}", record.red());
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let cancellation = Cancellation::new();
    let trigger = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupted, cancelling");
            trigger.cancel();
        }
    });

    match dispatch(cli, cancellation).await {
        Ok(summary) => {
            log::info!(
                "done: {} page(s), {} object(s)",
                summary.pages,
                summary.objects
            );
            ExitCode::SUCCESS
        }
        Err(failure) => {
            report(&failure);
            ExitCode::FAILURE
        }
    }
}
