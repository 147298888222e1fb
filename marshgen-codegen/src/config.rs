//! Generator configuration.

/// Default name of the option overriding a schema package for target classes.
pub const DEFAULT_PACKAGE_OPTION: &str = "java_package";

/// Default package of the runtime marshaller contract.
pub const DEFAULT_RUNTIME_PACKAGE: &str = "org.marshgen.runtime";

/// Configuration for [`crate::Generator`] and the Java renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    package_option: String,
    runtime_package: String,
    message_suffix: String,
    enum_suffix: String,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package_option: DEFAULT_PACKAGE_OPTION.to_string(),
            runtime_package: DEFAULT_RUNTIME_PACKAGE.to_string(),
            message_suffix: "MessageMarshaller".to_string(),
            enum_suffix: "EnumMarshaller".to_string(),
        }
    }

    /// Sets the package override option name.
    #[must_use]
    pub fn package_option(mut self, name: impl Into<String>) -> Self {
        self.package_option = name.into();
        self
    }

    /// Sets the runtime contract package used by rendered sources.
    #[must_use]
    pub fn runtime_package(mut self, package: impl Into<String>) -> Self {
        self.runtime_package = package.into();
        self
    }

    /// Sets the suffix of message marshaller names.
    #[must_use]
    pub fn message_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.message_suffix = suffix.into();
        self
    }

    /// Sets the suffix of enum marshaller names.
    #[must_use]
    pub fn enum_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.enum_suffix = suffix.into();
        self
    }

    /// Package override option name.
    #[must_use]
    pub fn package_option_name(&self) -> &str {
        &self.package_option
    }

    /// Runtime contract package.
    #[must_use]
    pub fn runtime_package_name(&self) -> &str {
        &self.runtime_package
    }

    /// Message marshaller name for a message simple name.
    #[must_use]
    pub fn message_marshaller_name(&self, simple_name: &str) -> String {
        format!("{}{}", simple_name, self.message_suffix)
    }

    /// Enum marshaller name for an enum simple name.
    #[must_use]
    pub fn enum_marshaller_name(&self, simple_name: &str) -> String {
        format!("{}{}", simple_name, self.enum_suffix)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
