use flickmark_models::Language;
use std::fmt;
use std::str::FromStr;

/// The closed set of translatable message keys. Every key has a translation
/// in every supported language; the completeness test below enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Wishlist,
    Movies,
    TvShows,
    UnknownDate,
    WelcomeMessage,
    WelcomeDescription,
    SearchPlaceholder,
    Search,
    NowPlaying,
    SearchResults,
    SearchingFor,
    ResultsFound,
    PopularTvShows,
    NoResultsFound,
    Recommendations,
    Duration,
    Minutes,
    Language,
    NoMoviesInWishlist,
    BackToHome,
    NoTvShowsInWishlist,
    NoRecommendations,
}

impl MessageKey {
    pub const ALL: [MessageKey; 22] = [
        MessageKey::Wishlist,
        MessageKey::Movies,
        MessageKey::TvShows,
        MessageKey::UnknownDate,
        MessageKey::WelcomeMessage,
        MessageKey::WelcomeDescription,
        MessageKey::SearchPlaceholder,
        MessageKey::Search,
        MessageKey::NowPlaying,
        MessageKey::SearchResults,
        MessageKey::SearchingFor,
        MessageKey::ResultsFound,
        MessageKey::PopularTvShows,
        MessageKey::NoResultsFound,
        MessageKey::Recommendations,
        MessageKey::Duration,
        MessageKey::Minutes,
        MessageKey::Language,
        MessageKey::NoMoviesInWishlist,
        MessageKey::BackToHome,
        MessageKey::NoTvShowsInWishlist,
        MessageKey::NoRecommendations,
    ];

    /// Key name as persisted payloads and lookups spell it.
    pub fn as_key(self) -> &'static str {
        match self {
            MessageKey::Wishlist => "wishlist",
            MessageKey::Movies => "movies",
            MessageKey::TvShows => "tvShows",
            MessageKey::UnknownDate => "unknownDate",
            MessageKey::WelcomeMessage => "welcomeMessage",
            MessageKey::WelcomeDescription => "welcomeDescription",
            MessageKey::SearchPlaceholder => "searchPlaceholder",
            MessageKey::Search => "search",
            MessageKey::NowPlaying => "nowPlaying",
            MessageKey::SearchResults => "searchResults",
            MessageKey::SearchingFor => "searchingFor",
            MessageKey::ResultsFound => "resultsFound",
            MessageKey::PopularTvShows => "popularTvShows",
            MessageKey::NoResultsFound => "noResultsFound",
            MessageKey::Recommendations => "recommendations",
            MessageKey::Duration => "duration",
            MessageKey::Minutes => "minutes",
            MessageKey::Language => "language",
            MessageKey::NoMoviesInWishlist => "noMoviesInWishlist",
            MessageKey::BackToHome => "backToHome",
            MessageKey::NoTvShowsInWishlist => "noTVShowsInWishlist",
            MessageKey::NoRecommendations => "noRecommendations",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown message key `{0}`")]
pub struct UnknownMessageKey(String);

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_key() == s)
            .ok_or_else(|| UnknownMessageKey(s.to_string()))
    }
}

/// Compiled-in translation table.
pub fn message(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Ar => arabic(key),
        Language::Fr => french(key),
        Language::Zh => chinese(key),
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Wishlist => "Wishlist",
        MessageKey::Movies => "Movies",
        MessageKey::TvShows => "TV Shows",
        MessageKey::UnknownDate => "Unknown Date",
        MessageKey::WelcomeMessage => "Welcome to our movie app",
        MessageKey::WelcomeDescription => {
            "Millions of movies, TV shows and people to discover. Explore now."
        }
        MessageKey::SearchPlaceholder => "Search and explore...",
        MessageKey::Search => "Search",
        MessageKey::NowPlaying => "Now Playing",
        MessageKey::SearchResults => "Search Results",
        MessageKey::SearchingFor => "Searching for",
        MessageKey::ResultsFound => "results found",
        MessageKey::PopularTvShows => "Popular TV Shows",
        MessageKey::NoResultsFound => "No results found. Please try a different search term.",
        MessageKey::Recommendations => "Recommendations",
        MessageKey::Duration => "Duration",
        MessageKey::Minutes => "minutes",
        MessageKey::Language => "Language",
        MessageKey::NoMoviesInWishlist => "No Movies In Wishlist",
        MessageKey::BackToHome => "Back To Home",
        MessageKey::NoTvShowsInWishlist => "No Tvs In Wishlist",
        MessageKey::NoRecommendations => "No recommendations available",
    }
}

fn arabic(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Wishlist => "قائمة المفضلة",
        MessageKey::Movies => "أفلام",
        MessageKey::TvShows => "مسلسلات",
        MessageKey::UnknownDate => "تاريخ غير معروف",
        MessageKey::WelcomeMessage => "مرحباً بك في تطبيق الأفلام",
        MessageKey::WelcomeDescription => {
            "ملايين الأفلام والمسلسلات والأشخاص لاكتشافها. استكشف الآن."
        }
        MessageKey::SearchPlaceholder => "ابحث واستكشف...",
        MessageKey::Search => "بحث",
        MessageKey::NowPlaying => "يعرض الآن",
        MessageKey::SearchResults => "نتائج البحث",
        MessageKey::SearchingFor => "البحث عن",
        MessageKey::ResultsFound => "نتائج وجدت",
        MessageKey::PopularTvShows => "المسلسلات الشائعة",
        MessageKey::NoResultsFound => "لم يتم العثور على نتائج. يرجى تجربة مصطلح بحث مختلف.",
        MessageKey::Recommendations => "توصيات",
        MessageKey::Duration => "المدة",
        MessageKey::Minutes => "دقيقة",
        MessageKey::Language => "اللغة",
        MessageKey::NoMoviesInWishlist => "لا توجد أفلام في قائمة المفضلة",
        MessageKey::BackToHome => "العودة إلى الصفحة الرئيسية",
        MessageKey::NoTvShowsInWishlist => "لا توجد مسلسلات في قائمة المفضلة",
        MessageKey::NoRecommendations => "لا توجد توصيات متاحة",
    }
}

fn french(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Wishlist => "Liste de souhaits",
        MessageKey::Movies => "Films",
        MessageKey::TvShows => "Émissions",
        MessageKey::UnknownDate => "Date inconnue",
        MessageKey::WelcomeMessage => "Bienvenue sur notre application de films",
        MessageKey::WelcomeDescription => {
            "Des millions de films, d'émissions TV et de personnes à découvrir. Explorez maintenant."
        }
        MessageKey::SearchPlaceholder => "Rechercher et explorer...",
        MessageKey::Search => "Rechercher",
        MessageKey::NowPlaying => "À l'affiche",
        MessageKey::SearchResults => "Résultats de recherche",
        MessageKey::SearchingFor => "Recherche pour",
        MessageKey::ResultsFound => "résultats trouvés",
        MessageKey::PopularTvShows => "Émissions populaires",
        MessageKey::NoResultsFound => {
            "Aucun résultat trouvé. Veuillez essayer un terme de recherche différent."
        }
        MessageKey::Recommendations => "Recommandations",
        MessageKey::Duration => "Durée",
        MessageKey::Minutes => "minutes",
        MessageKey::Language => "Langue",
        MessageKey::NoMoviesInWishlist => "Aucun film dans la liste de souhaits",
        MessageKey::BackToHome => "Retour à l'accueil",
        MessageKey::NoTvShowsInWishlist => "Aucune série TV dans la liste de souhaits",
        MessageKey::NoRecommendations => "Aucune recommandation disponible",
    }
}

fn chinese(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Wishlist => "收藏列表",
        MessageKey::Movies => "电影",
        MessageKey::TvShows => "电视节目",
        MessageKey::UnknownDate => "未知日期",
        MessageKey::WelcomeMessage => "欢迎来到我们的电影应用",
        MessageKey::WelcomeDescription => "数百万部电影、电视节目和人物等待您的发现。立即探索。",
        MessageKey::SearchPlaceholder => "搜索和探索...",
        MessageKey::Search => "搜索",
        MessageKey::NowPlaying => "正在热映",
        MessageKey::SearchResults => "搜索结果",
        MessageKey::SearchingFor => "搜索",
        MessageKey::ResultsFound => "个结果",
        MessageKey::PopularTvShows => "热门电视节目",
        MessageKey::NoResultsFound => "未找到结果。请尝试不同的搜索词。",
        MessageKey::Recommendations => "推荐",
        MessageKey::Duration => "时长",
        MessageKey::Minutes => "分钟",
        MessageKey::Language => "语言",
        MessageKey::NoMoviesInWishlist => "收藏列表中没有电影",
        MessageKey::BackToHome => "返回首页",
        MessageKey::NoTvShowsInWishlist => "收藏夹中没有电视剧",
        MessageKey::NoRecommendations => "暂无推荐内容",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_translates_every_key() {
        for language in Language::ALL {
            for key in MessageKey::ALL {
                let text = message(language, key);
                assert!(
                    !text.is_empty(),
                    "missing translation for ({}, {})",
                    language.code(),
                    key.as_key()
                );
            }
        }
    }

    #[test]
    fn test_key_names_parse_back() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_key().parse::<MessageKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_key_does_not_parse() {
        assert!("nonexistentKey".parse::<MessageKey>().is_err());
    }
}
