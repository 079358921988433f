use consulta_cep::adapters::ViaCepClient;
use consulta_cep::config::lambda::LambdaConfig;
use consulta_cep::core::{CepLookupTool, Kwargs, TextResponse, Tool, ToolContext};
use consulta_cep::utils::{logger, validation::Validate};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Deserialize;

/// Invocation forwarded by the agent host.
#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    pub context: ToolContext,
    #[serde(default)]
    pub parameters: Kwargs,
}

async fn function_handler(
    tool: &CepLookupTool<ViaCepClient>,
    event: LambdaEvent<Request>,
) -> Result<TextResponse, Error> {
    tracing::info!("Handling {} invocation {}", tool.name(), event.context.request_id);

    let request = event.payload;
    Ok(tool.execute(&request.context, &request.parameters).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate()?;

    let tool = CepLookupTool::from_config(&lambda_config)?;
    let tool = &tool;

    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(tool, event).await
    }))
    .await
}
