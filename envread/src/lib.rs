pub mod env_reader;

/// Reader over the environment of the running process.
#[derive(Debug, Default, Clone)]
pub struct ProcessEnv;

#[cfg(feature = "mocks")]
pub mod mock {
    use mockall::mock;

    use crate::env_reader::EnvReader;

    mock! {
        pub ProcessEnv {}

        impl EnvReader for ProcessEnv {
            fn get(&self, key: &str) -> Option<String>;
            fn contains(&self, key: &str) -> bool;
        }
    }
}
