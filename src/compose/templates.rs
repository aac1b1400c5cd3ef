//! docker-compose 文档片段
//!
//! `{{environment}}` 紧跟在 `container_name` 行之后，
//! 渲染结果要么为空，要么是以换行结尾的完整 `environment:` 段。

/// 文件头注释
pub const HEADER: &str =
    "# This is an autogenerated file. Do not edit it manually. Use `generate-config` instead.";

/// 固定服务：mariadb、crossbar、master-web
pub const PREAMBLE: &str = r#"
---
version: "3.7"
services:
  mariadb:
    image: mariadb:10.6
    restart: unless-stopped
    container_name: mariadb
    environment:
      - MARIADB_ROOT_PASSWORD=password
      - MARIADB_DATABASE=buildbot
      - MARIADB_USER=buildmaster
      - MARIADB_PASSWORD=password
    networks:
      net_back:
    healthcheck:
      test: ['CMD', "mariadb-admin", "--password=password", "--protocol", "tcp", "ping"]
    volumes:
      - ./db:/docker-entrypoint-initdb.d:ro
      - ./mariadb:/var/lib/mysql:rw
    # command: --tmpdir=/var/lib/mysql/tmp

  crossbar:
    image: crossbario/crossbar
    restart: unless-stopped
    container_name: crossbar
    networks:
      net_back:

  master-web:
    image: quay.io/mariadb-foundation/bb-master:master-web
    restart: unless-stopped
    container_name: master-web
{{environment}}    volumes:
      - ./logs:/var/log/buildbot
      - ./buildbot/:/srv/buildbot/master
    entrypoint:
      - /srv/buildbot/master/docker-compose/start-bbm-web.sh
    networks:
      net_front:
      net_back:
    ports:
      - "127.0.0.1:{{web_port}}:{{web_port}}"
    depends_on:
      - mariadb
      - crossbar
"#;

/// 每个 master 一段
pub const MASTER_SERVICE: &str = r#"
  {{master_name}}:
    image: quay.io/mariadb-foundation/bb-master:master
    restart: unless-stopped
    container_name: {{master_name}}
{{environment}}    volumes:
      - ./logs:/var/log/buildbot
      - ./buildbot/:/srv/buildbot/master
    entrypoint:
      - /bin/bash
      - -c
      - "/srv/buildbot/master/docker-compose/start.sh {{master_directory}}"
    networks:
      net_front:
      net_back:
    ports:
      - "127.0.0.1:{{port}}:{{port}}"
    depends_on:
      - mariadb
      - crossbar
"#;

/// 网络定义
pub const TRAILER: &str = r#"
networks:
  net_front:
    driver: bridge
    ipam:
      driver: default
      config:
        - subnet: 172.200.0.0/24
    driver_opts:
      com.docker.network.enable_ipv6: "false"
      com.docker.network.bridge.name: "br_bb_front"
  net_back:
    driver: bridge
    internal: true
    ipam:
      driver: default
      config:
        - subnet: 172.16.201.0/24
    driver_opts:
      com.docker.network.enable_ipv6: "false"
      com.docker.network.bridge.name: "br_bb_back"
"#;
