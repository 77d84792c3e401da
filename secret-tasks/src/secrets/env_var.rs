use envread::ProcessEnv;
use envread::env_reader::EnvReader;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::secrets::cast::{CastError, CastFn, CastKind};
use crate::secrets::{Secret, SecretError};
use crate::task::Task;
use crate::task::config::TaskConfig;

/// Declarative form of an [EnvVarSecret], as found in a workflow definition
/// file. Scheduler-facing fields are flattened alongside the task's own.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EnvVarSecretConfig {
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) cast: Option<CastKind>,

    #[serde(default)]
    pub(crate) raise_if_missing: bool,

    #[serde(flatten)]
    pub(crate) task: TaskConfig,
}

/// Secret task resolving an environment variable at execution time.
///
/// The variable name is fixed at construction and may be overridden per
/// invocation. A retrieved value passes through the optional cast exactly
/// once; an absent variable yields no value unless the task was built with
/// [EnvVarSecret::raise_if_missing].
pub struct EnvVarSecret<E = ProcessEnv> {
    name: String,
    cast: Option<CastFn>,
    raise_if_missing: bool,
    config: TaskConfig,
    env: E,
}

impl EnvVarSecret<ProcessEnv> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cast: None,
            raise_if_missing: false,
            // secret values never checkpoint
            config: TaskConfig {
                checkpoint: false,
                ..Default::default()
            },
            env: ProcessEnv,
        }
    }

    pub fn from_config(config: EnvVarSecretConfig) -> Self {
        Self {
            name: config.name,
            cast: config.cast.map(CastKind::into_cast),
            raise_if_missing: config.raise_if_missing,
            config: TaskConfig {
                checkpoint: false,
                ..config.task
            },
            env: ProcessEnv,
        }
    }
}

impl<E> EnvVarSecret<E> {
    pub fn with_cast<F>(self, cast: F) -> Self
    where
        F: Fn(String) -> Result<Value, CastError> + Send + Sync + 'static,
    {
        Self {
            cast: Some(Box::new(cast)),
            ..self
        }
    }

    pub fn raise_if_missing(self) -> Self {
        Self {
            raise_if_missing: true,
            ..self
        }
    }

    pub fn with_task_config(self, config: TaskConfig) -> Self {
        Self {
            config: TaskConfig {
                checkpoint: false,
                ..config
            },
            ..self
        }
    }

    /// Swaps the environment source, e.g. for a mocked one in tests.
    pub fn with_env_reader<R: EnvReader>(self, env: R) -> EnvVarSecret<R> {
        EnvVarSecret {
            name: self.name,
            cast: self.cast,
            raise_if_missing: self.raise_if_missing,
            config: self.config,
            env,
        }
    }
}

impl<E: EnvReader> Task for EnvVarSecret<E> {
    type Input = Option<String>;
    type Output = Option<Value>;
    type Error = SecretError;

    fn config(&self) -> &TaskConfig {
        &self.config
    }

    #[tracing::instrument(skip_all, err)]
    fn run(&self, name: Option<String>) -> Result<Option<Value>, SecretError> {
        let name = name.as_deref().unwrap_or(&self.name);

        // Membership, not the retrieved value: a variable set to the empty
        // string is present.
        if self.raise_if_missing && !self.env.contains(name) {
            return Err(SecretError::MissingVariable(name.to_string()));
        }

        let Some(value) = self.env.get(name) else {
            debug!(name, "environment variable not present");
            return Ok(None);
        };

        match &self.cast {
            Some(cast) => cast(value).map(Some).map_err(SecretError::Cast),
            None => Ok(Some(Value::String(value))),
        }
    }
}

impl<E: EnvReader> Secret for EnvVarSecret<E> {}
