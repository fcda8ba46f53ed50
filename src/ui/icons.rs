pub struct Icons;

impl Icons {
    pub const LOCK: &str = "🔐";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const PEOPLE: &str = "👥";
    pub const FOLDER: &str = "🗂️";
    pub const NOTE: &str = "📝";
    pub const PLUS: &str = "➕";
    pub const PERSON: &str = "👤";
    pub const DATABASE: &str = "🗄️";
    pub const FLAG: &str = "🚩";
    pub const DOOR: &str = "🚪";
}
