pub struct Icons;

impl Icons {
    pub const BOOK: &str = "📖";
    pub const WARN: &str = "⚠️";
    pub const STATS: &str = "📊";
    pub const FILE: &str = "📄";
    pub const DATABASE: &str = "🗄️";
    pub const SKIP: &str = "⏭️";
}
