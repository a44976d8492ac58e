//! Source entry file (`src/main.js`)

/// Host capability the generated entry checks for before registering
/// its lifecycle callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostBinding {
    /// Global object injected by the host runtime
    pub global: &'static str,
}

const HOST_PLACEHOLDER: &str = "%HOST_GLOBAL%";
const CLASS_PLACEHOLDER: &str = "%CLASS_NAME%";

const ENTRY_TEMPLATE: &str = r#"import plugin from '../plugin.json';

class %CLASS_NAME% {

    async init() {
        // plugin initialisation
    }

    async destroy() {
        // plugin clean up
    }
}

if (window.%HOST_GLOBAL%) {
    const LunyxExtension = new %CLASS_NAME%();
    %HOST_GLOBAL%.setPluginInit(plugin.id, async (baseUrl, $page, { cacheFileUrl, cacheFile }) => {
        if (!baseUrl.endsWith('/')) {
            baseUrl += '/';
        }
        LunyxExtension.baseUrl = baseUrl;
        await LunyxExtension.init($page, cacheFile, cacheFileUrl);
    });
    %HOST_GLOBAL%.setPluginUnmount(plugin.id, () => {
        LunyxExtension.destroy();
    });
}
"#;

/// Render the entry file.
///
/// `class_name` is inserted verbatim into both the class declaration and the
/// constructor call. No escaping is applied.
pub fn render_entry(class_name: &str, host: HostBinding) -> String {
    // Class name goes in last so its contents are never re-substituted.
    ENTRY_TEMPLATE
        .replace(HOST_PLACEHOLDER, host.global)
        .replace(CLASS_PLACEHOLDER, class_name)
}
