//! Sample content inserted into an empty database.

use entity::room::RoomStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        post::PostRepository, project::ProjectRepository, room::RoomRepository,
        service::ServiceRepository,
    },
    error::AppError,
    model::{
        post::CreatePostParams,
        project::CreateProjectParams,
        room::RoomParams,
        service::CreateServiceParams,
    },
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn sample_projects() -> Vec<CreateProjectParams> {
    vec![
        CreateProjectParams {
            name: "Hội An Riverside Oasis".to_string(),
            slug: "hoian-riverside-oasis".to_string(),
            slogan: Some("Trải nghiệm kỳ nghỉ bình yên bên dòng sông Thu Bồn".to_string()),
            description: Some(
                "Nằm nép mình bên dòng sông Thu Bồn thơ mộng, Riverside Oasis mang đến không gian \
                 nghỉ dưỡng sang trọng với kiến trúc kết hợp giữa nét cổ điển Hội An và sự tiện \
                 nghi hiện đại."
                    .to_string(),
            ),
            airbnb_url: Some("https://airbnb.com/h/hoian-riverside".to_string()),
            is_featured: true,
            tags: strings(&["Riverside", "Luxury", "Pool"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=1200",
            ]),
            kind: "villa".to_string(),
        },
        CreateProjectParams {
            name: "Ancient Town Heritage Inn".to_string(),
            slug: "ancient-town-heritage".to_string(),
            slogan: Some("Chạm vào linh hồn của Phố Cổ".to_string()),
            description: Some(
                "Chỉ cách Chùa Cầu 5 phút đi bộ, Heritage Inn là ngôi nhà cổ được phục dựng giữ \
                 nguyên vẹn cấu trúc gỗ truyền thống."
                    .to_string(),
            ),
            airbnb_url: Some("https://airbnb.com/h/heritage-inn".to_string()),
            is_featured: true,
            tags: strings(&["Heritage", "Old Town", "Traditional"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=1200",
            ]),
            kind: "homestay".to_string(),
        },
        CreateProjectParams {
            name: "Phù Sa Terrace & Rice Field".to_string(),
            slug: "phu-sa-terrace".to_string(),
            slogan: Some("Thức dậy giữa cánh đồng lúa xanh mướt".to_string()),
            description: Some(
                "Tọa lạc tại vùng ven thanh bình của Hội An, Phù Sa Terrace mang đến góc nhìn 360 \
                 độ ra cánh đồng lúa An Mỹ."
                    .to_string(),
            ),
            airbnb_url: Some("https://airbnb.com/h/phu-sa-terrace".to_string()),
            is_featured: true,
            tags: strings(&["Rice Field", "Nature", "Eco-friendly"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1540541338287-41700207dee6?w=1200",
            ]),
            kind: "homestay".to_string(),
        },
    ]
}

fn sample_services() -> Vec<CreateServiceParams> {
    [
        (
            "Tour Khám Phá Rừng Dừa",
            "Trải nghiệm chèo thúng truyền thống tại rừng dừa Bảy Mẫu và thưởng thức hải sản địa phương.",
            "ship",
        ),
        (
            "Lớp Học Nấu Ăn Hội An",
            "Học cách chế biến Cao Lầu, Mì Quảng và Bánh Xèo cùng các đầu bếp bản địa.",
            "chef-hat",
        ),
        (
            "Dịch Vụ Cho Thuê Xe Đạp",
            "Xe đạp miễn phí hoặc xe điện cho thuê để khám phá các ngõ ngách và bãi biển quanh Hội An.",
            "bike",
        ),
        (
            "Dịch Vụ Đưa Đón Sân Bay",
            "Xe đưa đón riêng từ sân bay Đà Nẵng về Hội An với tài xế chuyên nghiệp.",
            "car",
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| CreateServiceParams {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

fn sample_posts() -> Vec<CreatePostParams> {
    vec![
        CreatePostParams {
            title: "Top 5 Quán Cà Phê Có Tầm Nhìn Đẹp Nhất Hội An".to_string(),
            slug: "top-5-cafe-hoian".to_string(),
            content: "Hội An không chỉ có phố cổ hay biển An Bàng, mà còn có những góc cà phê trên \
                      cao nhìn xuống những mái ngói rêu phong cực kỳ lãng mạn."
                .to_string(),
            category: Some("Cẩm nang du lịch".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=800".to_string(),
            ),
            author: Some("INN Team".to_string()),
        },
        CreatePostParams {
            title: "Kinh Nghiệm Chọn Homestay Phù Hợp Khi Đến Hội An".to_string(),
            slug: "kinh-nghiem-chon-homestay".to_string(),
            content: "Việc chọn đúng nơi lưu trú quyết định 50% sự thành công của chuyến đi."
                .to_string(),
            category: Some("Người trong nghề".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=800".to_string(),
            ),
            author: Some("Founder".to_string()),
        },
    ]
}

/// Rooms keyed by the index of their project in `sample_projects`.
fn sample_rooms() -> Vec<(usize, RoomParams)> {
    let room = |name: &str,
                kind: &str,
                price: i64,
                status: RoomStatus,
                description: &str,
                amenities: &[&str],
                image: &str| RoomParams {
        name: name.to_string(),
        kind: kind.to_string(),
        price,
        status,
        project_id: 0,
        description: Some(description.to_string()),
        amenities: strings(amenities),
        images: strings(&[image]),
    };

    vec![
        (
            0,
            room(
                "Premier River Suite",
                "suite",
                2_500_000,
                RoomStatus::Available,
                "Suite hạng sang với ban công hướng thẳng ra sông Thu Bồn.",
                &["AC", "WiFi", "Minibar", "Bathtub", "Balcony", "River View"],
                "https://images.unsplash.com/photo-1590490360182-c33d57733427?w=800",
            ),
        ),
        (
            0,
            room(
                "Deluxe Pool View",
                "double",
                1_800_000,
                RoomStatus::Available,
                "Phòng đôi rộng rãi với cửa sổ lớn nhìn ra hồ bơi.",
                &["AC", "WiFi", "Smart TV", "Private Bathroom", "Pool Access"],
                "https://images.unsplash.com/photo-1566665797739-1674de7a421a?w=800",
            ),
        ),
        (
            1,
            room(
                "Old World Double Room",
                "double",
                1_200_000,
                RoomStatus::Available,
                "Phòng theo phong cách Indochine với nội thất gỗ cổ điển.",
                &["AC", "WiFi", "Tea/Coffee Maker", "Traditional Decor"],
                "https://images.unsplash.com/photo-1595526114035-0d45ed16cfbf?w=800",
            ),
        ),
        (
            2,
            room(
                "Rice Field View Terrace",
                "twin",
                950_000,
                RoomStatus::Occupied,
                "Phòng có hiên rộng nhìn ra cánh đồng lúa.",
                &["AC", "WiFi", "Terrace", "Kitchenette", "Rice Field View"],
                "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?w=800",
            ),
        ),
    ]
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the sample dataset unless a project already exists
    ///
    /// Rows are inserted one at a time without a transaction; a failure part way
    /// leaves the rows written so far in place.
    ///
    /// # Returns
    /// - `Ok(true)` - The database was empty and has been seeded
    /// - `Ok(false)` - Projects already exist, nothing was written
    /// - `Err(AppError)` - An insert failed
    pub async fn seed(&self) -> Result<bool, AppError> {
        let projects = ProjectRepository::new(self.db);

        if projects.count().await? > 0 {
            return Ok(false);
        }

        let mut project_ids = Vec::new();
        for params in sample_projects() {
            project_ids.push(projects.create(params).await?.id);
        }

        let services = ServiceRepository::new(self.db);
        for params in sample_services() {
            services.create(params).await?;
        }

        let posts = PostRepository::new(self.db);
        for params in sample_posts() {
            posts.create(params).await?;
        }

        let rooms = RoomRepository::new(self.db);
        for (project_index, mut params) in sample_rooms() {
            let Some(project_id) = project_ids.get(project_index) else {
                return Err(AppError::InternalError(format!(
                    "Sample room '{}' references missing project {}",
                    params.name, project_index
                )));
            };
            params.project_id = *project_id;
            rooms.create(params).await?;
        }

        tracing::debug!(
            "Seeded {} projects and {} rooms",
            project_ids.len(),
            rooms.count().await?
        );

        Ok(true)
    }
}
