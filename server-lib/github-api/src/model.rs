use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// upstream shapes, not implements all

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRepositoriesResponse {
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub owner: SearchItemOwner,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub private: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub watchers_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItemOwner {
    pub login: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub license: Value,
    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub html_url: String,
}

// public shapes

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub owner: String,
    pub repo_name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub private: Option<bool>,
    pub avatar_url: Option<String>,
    pub watchers_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDetail {
    pub full_name: String,
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub license: Option<License>,
    /// Web page of the repository owner.
    pub repos_url: String,
}

/// Upstream `license` value wrapped as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: Value,
}

impl From<SearchItem> for SearchResultItem {
    fn from(item: SearchItem) -> Self {
        Self {
            owner: item.owner.login,
            repo_name: item.name,
            full_name: item.full_name,
            html_url: item.html_url,
            description: item.description,
            stargazers_count: item.stargazers_count,
            forks_count: item.forks_count,
            private: item.private,
            avatar_url: item.owner.avatar_url,
            watchers_count: item.watchers_count,
        }
    }
}

impl From<Repository> for RepositoryDetail {
    fn from(repository: Repository) -> Self {
        let license = is_truthy(&repository.license).then(|| License {
            name: repository.license,
        });

        Self {
            full_name: repository.full_name,
            name: repository.name,
            description: repository.description,
            stargazers_count: repository.stargazers_count,
            forks_count: repository.forks_count,
            open_issues_count: repository.open_issues_count,
            language: repository.language,
            license,
            repos_url: repository.owner.html_url,
        }
    }
}

/// Key must be present, `null` is allowed.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(array) => !array.is_empty(),
        Value::Object(object) => !object.is_empty(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn repository_json(license: Value) -> Value {
        json!({
            "full_name": "testuser/test-repo",
            "name": "test-repo",
            "description": "A test repository",
            "stargazers_count": 100,
            "forks_count": 50,
            "open_issues_count": 10,
            "language": "Rust",
            "license": license,
            "owner": {"html_url": "https://github.com/testuser"}
        })
    }

    #[test]
    pub fn test_search_item_mapping() {
        let item: SearchItem = serde_json::from_value(json!({
            "owner": {"login": "u", "avatar_url": "a"},
            "name": "r",
            "full_name": "u/r",
            "html_url": "h",
            "description": "d",
            "stargazers_count": 1,
            "forks_count": 2,
            "private": false,
            "watchers_count": 3
        }))
        .expect("well-formed item should decode");

        let mapped = serde_json::to_value(SearchResultItem::from(item)).unwrap();

        assert_eq!(
            mapped,
            json!({
                "owner": "u",
                "repo_name": "r",
                "full_name": "u/r",
                "html_url": "h",
                "description": "d",
                "stargazers_count": 1,
                "forks_count": 2,
                "private": false,
                "avatar_url": "a",
                "watchers_count": 3
            })
        );
    }

    #[test]
    pub fn test_search_item_optional_fields_null() {
        let item: SearchItem = serde_json::from_value(json!({
            "owner": {"login": "u", "avatar_url": null},
            "name": "r",
            "full_name": "u/r",
            "html_url": "h",
            "description": null,
            "stargazers_count": 0,
            "forks_count": 0,
            "private": null,
            "watchers_count": null
        }))
        .unwrap();

        let mapped = SearchResultItem::from(item);
        assert_eq!(mapped.description, None);
        assert_eq!(mapped.private, None);
        assert_eq!(mapped.avatar_url, None);
        assert_eq!(mapped.watchers_count, None);
    }

    #[test]
    pub fn test_search_item_missing_required_field() {
        let result = serde_json::from_value::<SearchItem>(json!({
            "owner": {"login": "u"},
            "name": "r",
            "html_url": "h",
            "stargazers_count": 1,
            "forks_count": 2
        }));

        assert!(result.is_err());
    }

    #[test]
    pub fn test_search_item_nullable_keys_must_be_present() {
        let item = json!({
            "owner": {"login": "u", "avatar_url": null},
            "name": "r",
            "full_name": "u/r",
            "html_url": "h",
            "description": null,
            "stargazers_count": 1,
            "forks_count": 2,
            "private": null,
            "watchers_count": null
        });

        for key in ["description", "private", "watchers_count"] {
            let mut item = item.clone();
            item.as_object_mut().unwrap().remove(key);

            let err = serde_json::from_value::<SearchItem>(item).unwrap_err();
            assert!(err.to_string().contains(key), "unexpected error: {err}");
        }

        let mut item = item.clone();
        item["owner"].as_object_mut().unwrap().remove("avatar_url");
        let err = serde_json::from_value::<SearchItem>(item).unwrap_err();
        assert!(err.to_string().contains("avatar_url"), "unexpected error: {err}");
    }

    #[test]
    pub fn test_negative_count_rejected() {
        let mut body = repository_json(Value::Null);
        body["stargazers_count"] = json!(-1);

        assert!(serde_json::from_value::<Repository>(body).is_err());
    }

    #[test]
    pub fn test_license_wrapping() {
        let repository: Repository =
            serde_json::from_value(repository_json(json!("MIT License"))).unwrap();
        let detail = RepositoryDetail::from(repository);

        assert_eq!(
            detail.license,
            Some(License {
                name: json!("MIT License")
            })
        );
        assert_eq!(detail.repos_url, "https://github.com/testuser");
    }

    #[test]
    pub fn test_license_null_or_falsy() {
        for license in [Value::Null, json!(""), json!(false), json!({})] {
            let repository: Repository = serde_json::from_value(repository_json(license)).unwrap();
            assert_eq!(RepositoryDetail::from(repository).license, None);
        }
    }

    #[test]
    pub fn test_license_absent() {
        let mut body = repository_json(Value::Null);
        body.as_object_mut().unwrap().remove("license");

        let repository: Repository = serde_json::from_value(body).unwrap();
        let detail = serde_json::to_value(RepositoryDetail::from(repository)).unwrap();

        assert_eq!(detail["license"], Value::Null);
    }

    #[test]
    pub fn test_license_object_kept_whole() {
        let license = json!({"key": "mit", "name": "MIT License"});
        let repository: Repository = serde_json::from_value(repository_json(license.clone())).unwrap();

        assert_eq!(
            RepositoryDetail::from(repository).license,
            Some(License { name: license })
        );
    }
}
